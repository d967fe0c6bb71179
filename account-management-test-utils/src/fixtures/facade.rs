//! Facade API mock endpoints.
//!
//! Each method registers one endpoint on the mock server which verifies it was called
//! exactly `expected_requests` times. Endpoints scoped to an organisation accept any query
//! string; tests that care about the query register their own mock.

use mockito::{Matcher, Mock};
use serde_json::Value;
use uuid::Uuid;

use crate::TestContext;

impl TestContext {
    pub fn facade<'a>(&'a mut self) -> FacadeFixtures<'a> {
        FacadeFixtures { setup: self }
    }
}

pub struct FacadeFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FacadeFixtures<'a> {
    /// GET `/api/user-accounts` answering with `account`.
    pub fn create_user_account_endpoint(&mut self, account: Value, expected_requests: usize) -> Mock {
        self.json_endpoint("GET", "/api/user-accounts", account, expected_requests)
    }

    /// GET `/api/organisations/users` answering with `members`.
    pub fn create_team_members_endpoint(
        &mut self,
        members: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(
            "GET",
            "/api/organisations/users",
            Value::Array(members),
            expected_requests,
        )
    }

    /// GET `/api/address-lookup?postcode=...` answering with `addresses`.
    pub fn create_address_lookup_endpoint(
        &mut self,
        postcode: &str,
        addresses: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/api/address-lookup")
            .match_query(Matcher::UrlEncoded("postcode".into(), postcode.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(addresses.to_string())
            .expect(expected_requests)
            .create()
    }

    /// GET `/api/address-lookup` answering 503 for any postcode.
    pub fn create_address_lookup_failure(&mut self, expected_requests: usize) -> Mock {
        self.status_endpoint("GET", "/api/address-lookup", 503, expected_requests)
    }

    /// POST `/api/accounts-management/invite-user` answering with `status`.
    pub fn create_invite_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.status_endpoint(
            "POST",
            "/api/accounts-management/invite-user",
            status,
            expected_requests,
        )
    }

    /// DELETE `/api/connections/person/{person_id}` answering with `status`.
    pub fn create_remove_person_endpoint(
        &mut self,
        person_id: Uuid,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/api/connections/person/{}", person_id);

        self.status_endpoint("DELETE", &path, status, expected_requests)
    }

    /// GET `/api/connections/{connection_id}/roles` answering with `permission_type`.
    pub fn create_connection_permission_endpoint(
        &mut self,
        connection_id: Uuid,
        permission_type: &str,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/api/connections/{}/roles", connection_id);
        let body = serde_json::json!({
            "permissionType": permission_type,
            "userId": Uuid::new_v4()
        });

        self.json_endpoint("GET", &path, body, expected_requests)
    }

    /// GET `/api/connections/{connection_id}/person` answering with the person's name.
    pub fn create_connection_person_endpoint(
        &mut self,
        connection_id: Uuid,
        first_name: &str,
        last_name: &str,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/api/connections/{}/person", connection_id);
        let body = serde_json::json!({
            "firstName": first_name,
            "lastName": last_name
        });

        self.json_endpoint("GET", &path, body, expected_requests)
    }

    /// PUT `/api/connections/{connection_id}/roles` answering with `status`.
    pub fn create_permission_update_endpoint(
        &mut self,
        connection_id: Uuid,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/api/connections/{}/roles", connection_id);

        self.status_endpoint("PUT", &path, status, expected_requests)
    }

    /// PUT `/api/connections/{connection_id}/delegated-person-nomination` answering with
    /// `status`.
    pub fn create_nomination_endpoint(
        &mut self,
        connection_id: Uuid,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!(
            "/api/connections/{}/delegated-person-nomination",
            connection_id
        );

        self.status_endpoint("PUT", &path, status, expected_requests)
    }

    /// PUT `/api/users/user-details` answering whether the change needs approval.
    pub fn create_user_details_endpoint(
        &mut self,
        requires_approval: bool,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::json!({ "requiresApproval": requires_approval });

        self.json_endpoint("PUT", "/api/users/user-details", body, expected_requests)
    }

    /// PUT `/api/organisations/{organisation_id}` answering with `status`.
    pub fn create_organisation_update_endpoint(
        &mut self,
        organisation_id: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/api/organisations/{}", organisation_id);

        self.status_endpoint("PUT", &path, status, expected_requests)
    }

    fn json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    fn status_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
