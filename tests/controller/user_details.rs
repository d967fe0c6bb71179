use account_management::{
    server::{
        controller::user_details::{
            check_your_details, declaration, details_change_requested,
            submit_check_your_details, submit_declaration, submit_what_are_your_details,
            what_are_your_details, WhatAreYourDetailsForm,
        },
        model::{page, session::user::SessionUserData},
    },
    view::Page,
};

use super::*;

fn details_form(
    first_name: &str,
    last_name: &str,
    telephone: &str,
) -> Form<WhatAreYourDetailsForm> {
    Form(WhatAreYourDetailsForm {
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        job_title: Some("Director".to_string()),
        telephone: Some(telephone.to_string()),
    })
}

async fn submit_details(test: &TestContext, form: Form<WhatAreYourDetailsForm>) {
    let result = submit_what_are_your_details(test.session.clone(), form)
        .await
        .unwrap();

    assert_eq!(result.redirect_location(), Some(page::CHECK_YOUR_DETAILS));
}

#[tokio::test]
/// The form starts with the user's current details
async fn prefills_current_details() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::basic_user_account()).await;

    let result = what_are_your_details(test.session.clone()).await.unwrap();

    let Page::WhatAreYourDetails(model) = page(result) else {
        panic!("Expected the details page");
    };
    assert_eq!(model.details.first_name, "Ada");
    assert_eq!(model.details.telephone, "07700 900000");
    assert_eq!(model.back_link, page::MANAGE_ACCOUNT);

    Ok(())
}

#[tokio::test]
async fn rejects_invalid_details() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::basic_user_account()).await;

    let result = submit_what_are_your_details(
        test.session.clone(),
        details_form("", "Lovelace", "123"),
    )
    .await
    .unwrap();

    let Page::WhatAreYourDetails(model) = page(result) else {
        panic!("Expected the details page");
    };
    assert_eq!(model.errors.error_for("first_name"), Some("Enter your first name"));
    assert!(model.errors.error_for("telephone").is_some());
    assert!(model.errors.error_for("last_name").is_none());

    Ok(())
}

#[tokio::test]
/// The check page cannot be reached without filling in the form
async fn check_page_requires_journey() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::basic_user_account()).await;

    let result = check_your_details(test.session.clone()).await.unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));

    Ok(())
}

#[tokio::test]
/// Submitting the details unchanged does not call the facade
async fn unchanged_details_return_to_landing_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_details_endpoint(false, 0)
        .build()
        .await?;
    sign_in(&test, factory::basic_user_account()).await;
    submit_details(&test, details_form("Ada", "Lovelace", "07700 900000")).await;

    let result = submit_check_your_details(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Basic users' changes apply straight away and show on the next page
async fn applies_change_for_basic_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_details_endpoint(false, 1)
        .build()
        .await?;
    sign_in(&test, factory::basic_user_account()).await;
    submit_details(&test, details_form("Augusta", "King", "01632 960 001")).await;

    let check = check_your_details(test.session.clone()).await.unwrap();
    let Page::CheckYourDetails(model) = page(check) else {
        panic!("Expected the check page");
    };
    assert!(!model.requires_approval);
    assert_eq!(model.original.first_name, "Ada");
    assert_eq!(model.updated.first_name, "Augusta");

    let result = submit_check_your_details(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
    let user = SessionUserData::get(&test.session).await.unwrap().unwrap();
    assert_eq!(user.full_name(), "Augusta King");
    assert_eq!(user.telephone.as_deref(), Some("01632 960 001"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// An approved person renaming themselves goes through the declaration
async fn approved_name_change_needs_declaration() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_details_endpoint(true, 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    submit_details(&test, details_form("Ada", "Byron", "07700 900000")).await;
    let state = test.into_app_state();

    let result = submit_check_your_details(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    assert_eq!(result.redirect_location(), Some(page::DECLARATION));

    let result = declaration(test.session.clone()).await.unwrap();
    let Page::Declaration(model) = page(result) else {
        panic!("Expected the declaration page");
    };
    assert_eq!(model.back_link, page::CHECK_YOUR_DETAILS);

    let result = submit_declaration(State(state), test.session.clone())
        .await
        .unwrap();
    assert_eq!(result.redirect_location(), Some(page::DETAILS_CHANGE_REQUESTED));

    // Pending approval, so the session keeps the old name
    let user = SessionUserData::get(&test.session).await.unwrap().unwrap();
    assert_eq!(user.last_name, "Lovelace");

    let result = details_change_requested(test.session.clone()).await.unwrap();
    assert!(matches!(page(result), Page::DetailsChangeRequested(_)));

    // The confirmation is one-shot
    let result = details_change_requested(test.session.clone()).await.unwrap();
    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// The facade may still decide a change needs approval
async fn facade_can_require_approval() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_details_endpoint(true, 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    submit_details(&test, details_form("Ada", "Lovelace", "01632 960 001")).await;

    let result = submit_check_your_details(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap();

    assert_eq!(result.redirect_location(), Some(page::DETAILS_CHANGE_REQUESTED));
    test.assert_mocks();

    Ok(())
}
