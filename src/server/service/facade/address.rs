use reqwest::Method;

use crate::{
    model::address::{Address, AddressList},
    server::{error::facade::FacadeError, service::facade::FacadeClient},
};

impl FacadeClient {
    /// Looks up the postal addresses registered at a postcode.
    ///
    /// An unknown postcode yields an empty list, not an error.
    pub async fn get_address_list_by_postcode(
        &self,
        postcode: &str,
    ) -> Result<Vec<Address>, FacadeError> {
        let path = "/api/address-lookup";
        let request = self
            .request(Method::GET, path, None)
            .query(&[("postcode", postcode)]);

        let list: AddressList = self.send_json(request, path).await?;

        Ok(list.addresses)
    }
}
