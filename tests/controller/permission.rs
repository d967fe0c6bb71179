use account_management::{
    model::permission::{PermissionType, RelationshipWithOrganisation},
    server::{
        controller::permission::{
            change_account_permissions, check_details_send_invite, job_title,
            submit_change_account_permissions, submit_check_details_send_invite,
            submit_job_title, submit_name_of_consultancy, submit_relationship_with_organisation,
            ChangeAccountPermissionsForm, JobTitleForm, NameOfConsultancyForm,
            RelationshipWithOrganisationForm,
        },
        model::{action::ActionResult, page, session::journey::JourneySession},
    },
    view::Page,
};
use uuid::Uuid;

use super::*;

fn relationship_form(relationship: &str) -> Form<RelationshipWithOrganisationForm> {
    Form(RelationshipWithOrganisationForm {
        relationship_with_organisation: Some(relationship.to_string()),
        additional_relationship_information: None,
    })
}

/// Opens the permissions page for `id` and chooses Delegated, leaving the user on the
/// relationship page.
async fn start_nomination(test: &TestContext, id: Uuid) {
    let state = test.into_app_state();

    change_account_permissions(State(state.clone()), test.session.clone(), Path(id))
        .await
        .unwrap();
    submit_change_account_permissions(
        State(state),
        test.session.clone(),
        Path(id),
        permission_form("Delegated"),
    )
    .await
    .unwrap();
}

async fn answer_relationship(test: &TestContext, id: Uuid, relationship: &str) -> ActionResult {
    submit_relationship_with_organisation(
        test.session.clone(),
        Path(id),
        relationship_form(relationship),
    )
    .await
    .unwrap()
}

fn permission_form(permission_type: &str) -> Form<ChangeAccountPermissionsForm> {
    Form(ChangeAccountPermissionsForm {
        permission_type: Some(permission_type.to_string()),
    })
}

#[tokio::test]
/// Opening the page offers the grantable permissions with the current one selected
async fn shows_current_permission() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Basic", 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;

    let result = change_account_permissions(
        State(test.into_app_state()),
        test.session.clone(),
        Path(id),
    )
    .await
    .unwrap();

    let Page::ChangeAccountPermissions(model) = page(result) else {
        panic!("Expected the permissions page");
    };
    assert_eq!(model.person_name, "Grace Hopper");
    assert_eq!(model.selected, Some(PermissionType::Basic));
    assert_eq!(
        model.options,
        vec![
            PermissionType::Admin,
            PermissionType::Basic,
            PermissionType::Delegated
        ]
    );
    assert_eq!(model.back_link, page::MANAGE_ACCOUNT);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Only approved persons may change a delegated person
async fn forbidden_for_delegated_target_of_basic_admin() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", format!("/api/connections/{}/roles", id).as_str())
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"permissionType":"Delegated"}"#)
                .create()
        })
        .build()
        .await?;
    sign_in(&test, factory::basic_admin_user_account()).await;

    let result = change_account_permissions(
        State(test.into_app_state()),
        test.session.clone(),
        Path(id),
    )
    .await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(location(&resp), "/error?statusCode=403");

    Ok(())
}

#[tokio::test]
/// Users cannot change their own permission
async fn forbidden_for_own_connection() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let account = factory::delegated_user_account();
    let body = serde_json::json!({
        "permissionType": "Admin",
        "userId": account["id"].clone()
    })
    .to_string();
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", format!("/api/connections/{}/roles", id).as_str())
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create()
        })
        .build()
        .await?;
    sign_in(&test, account).await;

    let result = change_account_permissions(
        State(test.into_app_state()),
        test.session.clone(),
        Path(id),
    )
    .await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(location(&resp), "/error?statusCode=403");

    Ok(())
}

#[tokio::test]
/// Submitting without opening the page first goes back to the landing page
async fn submit_requires_item() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::approved_user_account()).await;

    let result = submit_change_account_permissions(
        State(test.into_app_state()),
        test.session.clone(),
        Path(Uuid::new_v4()),
        permission_form("Admin"),
    )
    .await
    .unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));

    Ok(())
}

#[tokio::test]
/// Choosing Admin applies the change straight away
async fn applies_admin_permission() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Basic", 1)
        .with_permission_update_endpoint(id, 200, 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();

    change_account_permissions(State(state.clone()), test.session.clone(), Path(id))
        .await
        .unwrap();
    let result = submit_change_account_permissions(
        State(state),
        test.session.clone(),
        Path(id),
        permission_form("Admin"),
    )
    .await
    .unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
    let journey = JourneySession::get(&test.session).await.unwrap();
    assert!(journey.permission_management.item(id).is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Keeping the current permission changes nothing
async fn unchanged_permission_skips_update() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Basic", 1)
        .with_permission_update_endpoint(id, 200, 0)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();

    change_account_permissions(State(state.clone()), test.session.clone(), Path(id))
        .await
        .unwrap();
    let result = submit_change_account_permissions(
        State(state),
        test.session.clone(),
        Path(id),
        permission_form("Basic"),
    )
    .await
    .unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Delegated persons cannot grant Delegated
async fn rejects_permission_not_grantable() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Basic", 1)
        .build()
        .await?;
    sign_in(&test, factory::delegated_user_account()).await;
    let state = test.into_app_state();

    change_account_permissions(State(state.clone()), test.session.clone(), Path(id))
        .await
        .unwrap();
    let result = submit_change_account_permissions(
        State(state),
        test.session.clone(),
        Path(id),
        permission_form("Delegated"),
    )
    .await
    .unwrap();

    let Page::ChangeAccountPermissions(model) = page(result) else {
        panic!("Expected the permissions page");
    };
    assert!(model.errors.error_for("permission_type").is_some());

    Ok(())
}

#[tokio::test]
/// The full nomination: relationship, job title, check page, then the facade call
async fn nominates_delegated_person() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .with_nomination_endpoint(id, 200, 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();

    change_account_permissions(State(state.clone()), test.session.clone(), Path(id))
        .await
        .unwrap();

    let result = submit_change_account_permissions(
        State(state.clone()),
        test.session.clone(),
        Path(id),
        permission_form("Delegated"),
    )
    .await
    .unwrap();
    assert_eq!(
        result.redirect_location(),
        Some(page::with_id(page::RELATIONSHIP_WITH_ORGANISATION, id).as_str())
    );

    let result = submit_relationship_with_organisation(
        test.session.clone(),
        Path(id),
        Form(RelationshipWithOrganisationForm {
            relationship_with_organisation: Some("Employee".to_string()),
            additional_relationship_information: None,
        }),
    )
    .await
    .unwrap();
    assert_eq!(
        result.redirect_location(),
        Some(page::with_id(page::JOB_TITLE, id).as_str())
    );

    let result = job_title(test.session.clone(), Path(id)).await.unwrap();
    let Page::JobTitle(model) = page(result) else {
        panic!("Expected the job title page");
    };
    assert_eq!(
        model.back_link,
        page::with_id(page::RELATIONSHIP_WITH_ORGANISATION, id)
    );

    submit_job_title(
        test.session.clone(),
        Path(id),
        Form(JobTitleForm {
            job_title: Some("Operations Director".to_string()),
        }),
    )
    .await
    .unwrap();

    let result = check_details_send_invite(test.session.clone(), Path(id))
        .await
        .unwrap();
    let Page::CheckDetailsSendInvite(model) = page(result) else {
        panic!("Expected the check page");
    };
    assert_eq!(model.relationship, RelationshipWithOrganisation::Employee);
    assert_eq!(model.job_title.as_deref(), Some("Operations Director"));
    assert_eq!(model.name_of_consultancy, None);

    let result = submit_check_details_send_invite(State(state), test.session.clone(), Path(id))
        .await
        .unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
    let journey = JourneySession::get(&test.session).await.unwrap();
    assert!(journey.permission_management.item(id).is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// "Other" needs a description of the relationship
async fn other_relationship_requires_description() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();

    change_account_permissions(State(state.clone()), test.session.clone(), Path(id))
        .await
        .unwrap();
    submit_change_account_permissions(
        State(state),
        test.session.clone(),
        Path(id),
        permission_form("Delegated"),
    )
    .await
    .unwrap();

    let result = submit_relationship_with_organisation(
        test.session.clone(),
        Path(id),
        Form(RelationshipWithOrganisationForm {
            relationship_with_organisation: Some("Other".to_string()),
            additional_relationship_information: Some("  ".to_string()),
        }),
    )
    .await
    .unwrap();

    let Page::RelationshipWithOrganisation(model) = page(result) else {
        panic!("Expected the relationship page");
    };
    assert_eq!(model.selected, Some(RelationshipWithOrganisation::Other));
    assert!(model
        .errors
        .error_for("additional_relationship_information")
        .is_some());

    Ok(())
}

#[tokio::test]
/// Skipping ahead to the job title page is refused
async fn job_title_requires_journey() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;

    change_account_permissions(State(test.into_app_state()), test.session.clone(), Path(id))
        .await
        .unwrap();

    let result = job_title(test.session.clone(), Path(id)).await.unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));

    Ok(())
}

#[tokio::test]
/// Consultants are asked for the consultancy's name instead of a job title
async fn nominates_consultant() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .with_nomination_endpoint(id, 200, 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    start_nomination(&test, id).await;

    let result = answer_relationship(&test, id, "Consultant").await;
    assert_eq!(
        result.redirect_location(),
        Some(page::with_id(page::NAME_OF_CONSULTANCY, id).as_str())
    );

    let result = submit_name_of_consultancy(
        test.session.clone(),
        Path(id),
        Form(NameOfConsultancyForm {
            name_of_consultancy: Some("Compliance Partners LLP".to_string()),
        }),
    )
    .await
    .unwrap();
    assert_eq!(
        result.redirect_location(),
        Some(page::with_id(page::CHECK_DETAILS_SEND_INVITE, id).as_str())
    );

    let result = check_details_send_invite(test.session.clone(), Path(id))
        .await
        .unwrap();
    let Page::CheckDetailsSendInvite(model) = page(result) else {
        panic!("Expected the check page");
    };
    assert_eq!(model.relationship, RelationshipWithOrganisation::Consultant);
    assert_eq!(
        model.name_of_consultancy.as_deref(),
        Some("Compliance Partners LLP")
    );
    assert_eq!(model.job_title, None);
    assert_eq!(
        model.back_link,
        page::with_id(page::NAME_OF_CONSULTANCY, id)
    );

    let result = submit_check_details_send_invite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(id),
    )
    .await
    .unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn consultancy_employee_is_asked_for_consultancy() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    start_nomination(&test, id).await;

    let result = answer_relationship(&test, id, "ConsultancyEmployee").await;

    assert_eq!(
        result.redirect_location(),
        Some(page::with_id(page::NAME_OF_CONSULTANCY, id).as_str())
    );

    Ok(())
}

#[tokio::test]
/// Job titles over 450 characters are rejected
async fn rejects_long_job_title() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    start_nomination(&test, id).await;
    answer_relationship(&test, id, "Employee").await;

    let result = submit_job_title(
        test.session.clone(),
        Path(id),
        Form(JobTitleForm {
            job_title: Some("a".repeat(451)),
        }),
    )
    .await
    .unwrap();

    let Page::JobTitle(model) = page(result) else {
        panic!("Expected the job title page");
    };
    assert_eq!(
        model.errors.error_for("job_title"),
        Some("Their job title must be 450 characters or less")
    );
    let journey = JourneySession::get(&test.session).await.unwrap();
    assert_eq!(journey.permission_management.item(id).unwrap().job_title, None);

    Ok(())
}

#[tokio::test]
/// Consultancy names over 160 characters are rejected
async fn rejects_long_consultancy_name() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    start_nomination(&test, id).await;
    answer_relationship(&test, id, "Consultant").await;

    let result = submit_name_of_consultancy(
        test.session.clone(),
        Path(id),
        Form(NameOfConsultancyForm {
            name_of_consultancy: Some("a".repeat(161)),
        }),
    )
    .await
    .unwrap();

    let Page::NameOfConsultancy(model) = page(result) else {
        panic!("Expected the consultancy page");
    };
    assert_eq!(
        model.errors.error_for("name_of_consultancy"),
        Some("The name of the consultancy must be 160 characters or less")
    );

    Ok(())
}

#[tokio::test]
/// A failed nomination goes to the 500 page and keeps the answers
async fn nomination_failure_shows_error_page() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .with_nomination_endpoint(id, 500, 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    start_nomination(&test, id).await;
    answer_relationship(&test, id, "Employee").await;
    submit_job_title(
        test.session.clone(),
        Path(id),
        Form(JobTitleForm {
            job_title: Some("Director".to_string()),
        }),
    )
    .await
    .unwrap();

    let resp = submit_check_details_send_invite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(id),
    )
    .await
    .unwrap_err()
    .into_response();

    assert_eq!(location(&resp), "/error?statusCode=500");
    let journey = JourneySession::get(&test.session).await.unwrap();
    assert!(journey.permission_management.item(id).is_some());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// A user who lost the right to nominate mid-journey cannot finish the nomination
async fn nomination_requires_current_rights() -> Result<(), TestError> {
    let id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_permission_endpoints(id, "Admin", 1)
        .with_nomination_endpoint(id, 200, 0)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    start_nomination(&test, id).await;
    answer_relationship(&test, id, "Employee").await;
    submit_job_title(
        test.session.clone(),
        Path(id),
        Form(JobTitleForm {
            job_title: Some("Director".to_string()),
        }),
    )
    .await
    .unwrap();

    sign_in(&test, factory::delegated_user_account()).await;

    let check = check_details_send_invite(test.session.clone(), Path(id))
        .await
        .unwrap_err()
        .into_response();
    assert_eq!(location(&check), "/error?statusCode=403");

    let submit = submit_check_details_send_invite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(id),
    )
    .await
    .unwrap_err()
    .into_response();
    assert_eq!(location(&submit), "/error?statusCode=403");
    test.assert_mocks();

    Ok(())
}
