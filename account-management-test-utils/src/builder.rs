//! Declarative test builder.
//!
//! Endpoints are queued on the builder and registered on the mock server by `build()`,
//! so a test reads as a list of what the external services will answer.

use mockito::Mock;
use serde_json::Value;
use uuid::Uuid;

use crate::{error::TestError, TestContext};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;
type FixtureBuilder = Box<dyn FnOnce(&mut TestContext) -> Vec<Mock>>;

/// Builder for declarative test initialization.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_token_endpoint("access-token")
///     .with_user_account_endpoint(factory::approved_user_account(), 1)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    // Custom mocks, registered first so tests can shadow a shortcut endpoint
    mock_builders: Vec<MockBuilder>,
    // Shortcut endpoints
    fixtures: Vec<FixtureBuilder>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            fixtures: Vec::new(),
        }
    }

    fn with_fixture<F>(mut self, fixture: F) -> Self
    where
        F: FnOnce(&mut TestContext) -> Vec<Mock> + 'static,
    {
        self.fixtures.push(Box::new(fixture));
        self
    }

    /// Identity provider token endpoint issuing `access_token`.
    pub fn with_token_endpoint(self, access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();

        self.with_fixture(move |test| vec![test.auth().create_token_endpoint(&access_token)])
    }

    /// Account returned for the signed-in user's access token.
    pub fn with_user_account_endpoint(self, account: Value, expected_requests: usize) -> Self {
        self.with_fixture(move |test| {
            vec![test
                .facade()
                .create_user_account_endpoint(account, expected_requests)]
        })
    }

    /// Team members listed for the organisation.
    pub fn with_team_members_endpoint(self, members: Vec<Value>, expected_requests: usize) -> Self {
        self.with_fixture(move |test| {
            vec![test
                .facade()
                .create_team_members_endpoint(members, expected_requests)]
        })
    }

    pub fn with_address_lookup_endpoint(
        self,
        postcode: impl Into<String>,
        addresses: Value,
        expected_requests: usize,
    ) -> Self {
        let postcode = postcode.into();

        self.with_fixture(move |test| {
            vec![test.facade().create_address_lookup_endpoint(
                &postcode,
                addresses,
                expected_requests,
            )]
        })
    }

    /// Address lookup answering 503 for every postcode.
    pub fn with_address_lookup_failure(self, expected_requests: usize) -> Self {
        self.with_fixture(move |test| {
            vec![test
                .facade()
                .create_address_lookup_failure(expected_requests)]
        })
    }

    pub fn with_invite_endpoint(self, status: usize, expected_requests: usize) -> Self {
        self.with_fixture(move |test| {
            vec![test
                .facade()
                .create_invite_endpoint(status, expected_requests)]
        })
    }

    pub fn with_remove_person_endpoint(
        self,
        person_id: Uuid,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with_fixture(move |test| {
            vec![test
                .facade()
                .create_remove_person_endpoint(person_id, status, expected_requests)]
        })
    }

    /// Current permission and name of the person behind `connection_id`, as fetched when
    /// a permission change starts.
    pub fn with_permission_endpoints(
        self,
        connection_id: Uuid,
        permission_type: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        let permission_type = permission_type.into();

        self.with_fixture(move |test| {
            let mut facade = test.facade();

            vec![
                facade.create_connection_permission_endpoint(
                    connection_id,
                    &permission_type,
                    expected_requests,
                ),
                facade.create_connection_person_endpoint(
                    connection_id,
                    "Grace",
                    "Hopper",
                    expected_requests,
                ),
            ]
        })
    }

    pub fn with_permission_update_endpoint(
        self,
        connection_id: Uuid,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with_fixture(move |test| {
            vec![test.facade().create_permission_update_endpoint(
                connection_id,
                status,
                expected_requests,
            )]
        })
    }

    pub fn with_nomination_endpoint(
        self,
        connection_id: Uuid,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with_fixture(move |test| {
            vec![test
                .facade()
                .create_nomination_endpoint(connection_id, status, expected_requests)]
        })
    }

    pub fn with_user_details_endpoint(
        self,
        requires_approval: bool,
        expected_requests: usize,
    ) -> Self {
        self.with_fixture(move |test| {
            vec![test
                .facade()
                .create_user_details_endpoint(requires_approval, expected_requests)]
        })
    }

    pub fn with_organisation_update_endpoint(
        self,
        organisation_id: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        let organisation_id = organisation_id.into();

        self.with_fixture(move |test| {
            vec![test.facade().create_organisation_update_endpoint(
                &organisation_id,
                status,
                expected_requests,
            )]
        })
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Starts the mock server and the in-memory session and registers every queued
    /// endpoint.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut test.server));
        }

        for fixture in self.fixtures {
            mocks.extend(fixture(&mut test));
        }

        // Store mocks so they live as long as the test
        test.mocks = mocks;

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
