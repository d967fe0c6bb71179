use account_management::{
    server::{
        controller::team::{
            check_invitation_details, remove_team_member, remove_team_member_confirmation,
            submit_check_invitation_details, submit_remove_team_member_confirmation,
            submit_team_member_email, submit_team_member_permissions, team_member_email,
            team_member_permissions, RemoveTeamMemberForm, RemoveTeamMemberQuery,
            TeamMemberEmailForm, TeamMemberPermissionsForm,
        },
        model::{page, session::journey::JourneySession},
    },
    view::Page,
};
use uuid::Uuid;

use super::*;

async fn enter_email(test: &TestContext, email: &str) {
    let result = submit_team_member_email(
        test.session.clone(),
        Form(TeamMemberEmailForm {
            email: Some(email.to_string()),
        }),
    )
    .await
    .unwrap();

    assert_eq!(result.redirect_location(), Some(page::TEAM_MEMBER_PERMISSIONS));
}

async fn choose_role(test: &TestContext, role_key: &str) {
    let result = submit_team_member_permissions(
        test.session.clone(),
        Form(TeamMemberPermissionsForm {
            role_key: Some(role_key.to_string()),
        }),
    )
    .await
    .unwrap();

    assert_eq!(
        result.redirect_location(),
        Some(page::TEAM_MEMBERS_CHECK_INVITATION_DETAILS)
    );
}

mod invite {
    use super::*;

    #[tokio::test]
    /// Expect a redirect to the 403 error page for basic employees
    async fn forbidden_for_basic_employee() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        sign_in(&test, factory::basic_user_account()).await;

        let result = team_member_email(test.session.clone()).await;

        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/error?statusCode=403");

        Ok(())
    }

    #[tokio::test]
    /// The email page links back to the landing page
    async fn email_page_starts_journey() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        sign_in(&test, factory::basic_admin_user_account()).await;

        let result = team_member_email(test.session.clone()).await.unwrap();

        let Page::TeamMemberEmail(model) = page(result) else {
            panic!("Expected the email page");
        };
        assert_eq!(model.back_link, page::MANAGE_ACCOUNT);
        assert!(model.errors.is_valid());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_malformed_email() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        sign_in(&test, factory::approved_user_account()).await;

        let result = submit_team_member_email(
            test.session.clone(),
            Form(TeamMemberEmailForm {
                email: Some("not-an-email".to_string()),
            }),
        )
        .await
        .unwrap();

        let Page::TeamMemberEmail(model) = page(result) else {
            panic!("Expected the email page");
        };
        assert_eq!(model.email, "not-an-email");
        assert!(model.errors.error_for("email").is_some());

        Ok(())
    }

    #[tokio::test]
    /// Opening the permissions page directly goes back to the landing page
    async fn permissions_page_requires_journey() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        sign_in(&test, factory::approved_user_account()).await;

        let result = team_member_permissions(test.session.clone()).await.unwrap();

        assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));

        Ok(())
    }

    #[tokio::test]
    async fn requires_role_choice() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        sign_in(&test, factory::approved_user_account()).await;
        enter_email(&test, "new@example.com").await;

        let result = submit_team_member_permissions(
            test.session.clone(),
            Form(TeamMemberPermissionsForm {
                role_key: Some("Approved.Admin".to_string()),
            }),
        )
        .await
        .unwrap();

        let Page::TeamMemberPermissions(model) = page(result) else {
            panic!("Expected the permissions page");
        };
        assert_eq!(model.email, "new@example.com");
        assert!(model.errors.error_for("role_key").is_some());

        Ok(())
    }

    #[tokio::test]
    /// Walking the wizard sends the invite and shows the banner on the landing page
    async fn sends_invitation() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_invite_endpoint(200, 1)
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;
        enter_email(&test, "new@example.com").await;
        choose_role(&test, "Basic.Admin").await;

        let check = check_invitation_details(test.session.clone()).await.unwrap();
        let Page::TeamMemberCheckDetails(model) = page(check) else {
            panic!("Expected the check page");
        };
        assert_eq!(model.back_link, page::TEAM_MEMBER_PERMISSIONS);
        assert_eq!(model.role_label, "Admin user");

        let result =
            submit_check_invitation_details(State(test.into_app_state()), test.session.clone())
                .await
                .unwrap();

        assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
        let journey = JourneySession::get(&test.session).await.unwrap();
        assert_eq!(
            journey.account_management.added_user_email.as_deref(),
            Some("new@example.com")
        );
        assert_eq!(journey.account_management.invitee_email_address, None);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// An address already invited is reported on the check page
    async fn shows_conflict_on_check_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_invite_endpoint(409, 1)
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;
        enter_email(&test, "taken@example.com").await;
        choose_role(&test, "Basic.Employee").await;

        let result =
            submit_check_invitation_details(State(test.into_app_state()), test.session.clone())
                .await
                .unwrap();

        let Page::TeamMemberCheckDetails(model) = page(result) else {
            panic!("Expected the check page");
        };
        assert!(model.invite_failed);
        assert_eq!(model.email, "taken@example.com");
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Other facade failures are sent to the error page
    async fn fails_for_server_error() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_invite_endpoint(500, 1)
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;
        enter_email(&test, "new@example.com").await;
        choose_role(&test, "Basic.Employee").await;

        let result =
            submit_check_invitation_details(State(test.into_app_state()), test.session.clone())
                .await;

        let resp = result.unwrap_err().into_response();
        assert_eq!(location(&resp), "/error?statusCode=500");

        Ok(())
    }
}

mod remove {
    use account_management::server::{error::Error, model::action::ActionResult};

    use super::*;

    async fn start_removal(test: &TestContext, person_id: Uuid) -> Result<ActionResult, Error> {
        remove_team_member(
            State(test.into_app_state()),
            test.session.clone(),
            Query(RemoveTeamMemberQuery { person_id }),
        )
        .await
    }

    async fn confirm(test: &TestContext, answer: Option<&str>) -> Result<ActionResult, Error> {
        submit_remove_team_member_confirmation(
            State(test.into_app_state()),
            test.session.clone(),
            Form(RemoveTeamMemberForm {
                remove: answer.map(str::to_string),
            }),
        )
        .await
    }

    #[tokio::test]
    /// The name shown comes from the team list
    async fn confirmation_shows_name() -> Result<(), TestError> {
        let person_id = Uuid::new_v4();
        let test = TestBuilder::new()
            .with_team_members_endpoint(
                vec![factory::team_member_for_person(person_id, "Basic")],
                1,
            )
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;

        let result = start_removal(&test, person_id).await.unwrap();
        assert_eq!(
            result.redirect_location(),
            Some(page::REMOVE_TEAM_MEMBER_CONFIRMATION)
        );

        let result = remove_team_member_confirmation(test.session.clone())
            .await
            .unwrap();
        let Page::RemoveTeamMember(model) = page(result) else {
            panic!("Expected the confirmation page");
        };
        assert_eq!(model.name, "Grace Hopper");
        assert_eq!(model.back_link, page::MANAGE_ACCOUNT);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Answering yes removes the person and leaves a banner for the landing page
    async fn removes_on_yes() -> Result<(), TestError> {
        let person_id = Uuid::new_v4();
        let test = TestBuilder::new()
            .with_team_members_endpoint(
                vec![factory::team_member_for_person(person_id, "Admin")],
                1,
            )
            .with_remove_person_endpoint(person_id, 200, 1)
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;
        start_removal(&test, person_id).await.unwrap();

        let result = confirm(&test, Some("yes")).await.unwrap();

        assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
        let journey = JourneySession::get(&test.session).await.unwrap();
        assert_eq!(
            journey.account_management.removed_user_name.as_deref(),
            Some("Grace Hopper")
        );
        assert!(journey.account_management.remove_user.is_none());
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Answering no leaves the team untouched
    async fn keeps_member_on_no() -> Result<(), TestError> {
        let person_id = Uuid::new_v4();
        let test = TestBuilder::new()
            .with_team_members_endpoint(
                vec![factory::team_member_for_person(person_id, "Basic")],
                1,
            )
            .with_remove_person_endpoint(person_id, 200, 0)
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;
        start_removal(&test, person_id).await.unwrap();

        let result = confirm(&test, Some("no")).await.unwrap();

        assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
        let journey = JourneySession::get(&test.session).await.unwrap();
        assert_eq!(journey.account_management.removed_user_name, None);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    async fn requires_answer() -> Result<(), TestError> {
        let person_id = Uuid::new_v4();
        let test = TestBuilder::new()
            .with_team_members_endpoint(
                vec![factory::team_member_for_person(person_id, "Basic")],
                1,
            )
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;
        start_removal(&test, person_id).await.unwrap();

        let result = confirm(&test, None).await.unwrap();

        let Page::RemoveTeamMember(model) = page(result) else {
            panic!("Expected the confirmation page");
        };
        assert_eq!(
            model.errors.error_for("remove"),
            Some("Select yes if you want to remove Grace Hopper")
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 and no facade calls when a user tries to remove themselves
    async fn refuses_self_removal() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_team_members_endpoint(Vec::new(), 0)
            .build()
            .await?;
        let user = sign_in(&test, factory::basic_admin_user_account()).await;

        let resp = start_removal(&test, user.id)
            .await
            .unwrap_err()
            .into_response();

        assert_eq!(location(&resp), "/error?statusCode=403");
        let journey = JourneySession::get(&test.session).await.unwrap();
        assert!(journey.account_management.remove_user.is_none());
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Approved persons are never removed here, even by another approved person
    async fn refuses_approved_person() -> Result<(), TestError> {
        let person_id = Uuid::new_v4();
        let test = TestBuilder::new()
            .with_team_members_endpoint(
                vec![factory::team_member_for_person(person_id, "Approved")],
                1,
            )
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;

        let resp = start_removal(&test, person_id)
            .await
            .unwrap_err()
            .into_response();

        assert_eq!(location(&resp), "/error?statusCode=403");

        Ok(())
    }

    #[tokio::test]
    /// Only an approved person may remove a delegated person
    async fn refuses_delegated_person_unless_approved() -> Result<(), TestError> {
        for account in [
            factory::delegated_user_account(),
            factory::basic_admin_user_account(),
        ] {
            let person_id = Uuid::new_v4();
            let test = TestBuilder::new()
                .with_team_members_endpoint(
                    vec![factory::team_member_for_person(person_id, "Delegated")],
                    1,
                )
                .build()
                .await?;
            sign_in(&test, account).await;

            let resp = start_removal(&test, person_id)
                .await
                .unwrap_err()
                .into_response();

            assert_eq!(location(&resp), "/error?statusCode=403");
        }

        Ok(())
    }

    #[tokio::test]
    async fn approved_person_may_remove_delegated_person() -> Result<(), TestError> {
        let person_id = Uuid::new_v4();
        let test = TestBuilder::new()
            .with_team_members_endpoint(
                vec![factory::team_member_for_person(person_id, "Delegated")],
                1,
            )
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;

        let result = start_removal(&test, person_id).await.unwrap();

        assert_eq!(
            result.redirect_location(),
            Some(page::REMOVE_TEAM_MEMBER_CONFIRMATION)
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a person who is not in the organisation's team
    async fn unknown_person_is_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_team_members_endpoint(
                vec![factory::team_member_for_person(Uuid::new_v4(), "Basic")],
                1,
            )
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;

        let resp = start_removal(&test, Uuid::new_v4())
            .await
            .unwrap_err()
            .into_response();

        assert_eq!(location(&resp), "/error?statusCode=404");

        Ok(())
    }

    #[tokio::test]
    /// A failed removal goes to the 500 page and shows no banner
    async fn removal_failure_shows_error_page() -> Result<(), TestError> {
        let person_id = Uuid::new_v4();
        let test = TestBuilder::new()
            .with_team_members_endpoint(
                vec![factory::team_member_for_person(person_id, "Basic")],
                1,
            )
            .with_remove_person_endpoint(person_id, 500, 1)
            .build()
            .await?;
        sign_in(&test, factory::approved_user_account()).await;
        start_removal(&test, person_id).await.unwrap();

        let resp = confirm(&test, Some("yes"))
            .await
            .unwrap_err()
            .into_response();

        assert_eq!(location(&resp), "/error?statusCode=500");
        let journey = JourneySession::get(&test.session).await.unwrap();
        assert_eq!(journey.account_management.removed_user_name, None);
        test.assert_mocks();

        Ok(())
    }
}
