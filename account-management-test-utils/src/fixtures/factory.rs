//! Factory functions for facade response bodies.
//!
//! Bodies are built as JSON in the facade's camelCase wire format. Tests deserialize them
//! into the portal's types or hand them to a mock endpoint.

use serde_json::{json, Value};
use uuid::Uuid;

use crate::constant::TEST_ORGANISATION_ID;

/// The test organisation: not registered with Companies House, based in England.
pub fn organisation() -> Value {
    json!({
        "id": TEST_ORGANISATION_ID,
        "name": "Test Packaging Ltd",
        "organisationNumber": "123 456",
        "companiesHouseNumber": null,
        "isCompaniesHouseCompany": false,
        "nationId": 1,
        "address": {
            "buildingNumber": "10",
            "street": "High Street",
            "town": "Bristol",
            "postcode": "BS1 4DJ"
        }
    })
}

fn user_account(service_role: &str, service_role_id: i32, role_in_organisation: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada.lovelace@example.com",
        "telephone": "07700 900000",
        "jobTitle": "Director",
        "roleInOrganisation": role_in_organisation,
        "serviceRole": service_role,
        "serviceRoleId": service_role_id,
        "enrolmentStatus": "Enrolled",
        "organisations": [organisation()]
    })
}

pub fn approved_user_account() -> Value {
    user_account("Approved", 1, "Admin")
}

pub fn delegated_user_account() -> Value {
    user_account("Delegated", 2, "Admin")
}

pub fn basic_admin_user_account() -> Value {
    user_account("Basic", 3, "Admin")
}

pub fn basic_user_account() -> Value {
    user_account("Basic", 3, "Employee")
}

/// A connected team member holding `permission_type` ("Basic", "Admin", ...).
pub fn team_member(connection_id: Uuid, permission_type: &str) -> Value {
    json!({
        "personId": Uuid::new_v4(),
        "connectionId": connection_id,
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": format!("{}@example.com", connection_id.simple()),
        "permissionType": permission_type,
        "enrolmentStatus": "Enrolled"
    })
}

/// A team member with a known person id, for tests that act on the person rather than
/// the connection.
pub fn team_member_for_person(person_id: Uuid, permission_type: &str) -> Value {
    let mut member = team_member(Uuid::new_v4(), permission_type);
    member["personId"] = json!(person_id);

    member
}

/// An address lookup result with `count` addresses on Downing Street.
pub fn address_list(count: usize) -> Value {
    let addresses: Vec<Value> = (1..=count)
        .map(|number| {
            json!({
                "buildingNumber": number.to_string(),
                "street": "Downing Street",
                "town": "London",
                "postcode": "SW1A 2AA"
            })
        })
        .collect();

    json!({ "addresses": addresses })
}
