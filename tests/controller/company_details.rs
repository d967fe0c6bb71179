use account_management::{
    model::address::Nation,
    server::{
        controller::company_details::{
            business_address, business_address_postcode, check_company_details,
            company_details_updated, select_business_address, submit_business_address,
            submit_business_address_postcode, submit_check_company_details,
            submit_select_business_address, submit_uk_nation, uk_nation, BusinessAddressForm,
            PostcodeForm, SelectBusinessAddressForm, UkNationForm,
        },
        model::{
            app::AppState,
            page,
            session::{journey::JourneySession, user::SessionUserData},
        },
    },
    view::Page,
};

use super::*;

async fn choose_nation(state: &AppState, test: &TestContext, nation: &str) {
    let result = submit_uk_nation(
        State(state.clone()),
        test.session.clone(),
        Form(UkNationForm {
            uk_nation: Some(nation.to_string()),
        }),
    )
    .await
    .unwrap();

    assert_eq!(result.redirect_location(), Some(page::BUSINESS_ADDRESS_POSTCODE));
}

/// Chooses England and looks up SW1A 2AA, leaving the user on the address list.
async fn look_up_addresses(state: &AppState, test: &TestContext) {
    choose_nation(state, test, "England").await;

    let result = submit_business_address_postcode(
        State(state.clone()),
        test.session.clone(),
        postcode_form("SW1A 2AA"),
    )
    .await
    .unwrap();

    assert_eq!(result.redirect_location(), Some(page::SELECT_BUSINESS_ADDRESS));
}

fn select_form(selected_index: &str) -> Form<SelectBusinessAddressForm> {
    Form(SelectBusinessAddressForm {
        selected_index: Some(selected_index.to_string()),
    })
}

fn postcode_form(postcode: &str) -> Form<PostcodeForm> {
    Form(PostcodeForm {
        postcode: Some(postcode.to_string()),
    })
}

#[tokio::test]
/// Companies House organisations cannot change their details here
async fn forbidden_for_companies_house_company() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut account = factory::approved_user_account();
    account["organisations"][0]["isCompaniesHouseCompany"] = serde_json::json!(true);
    sign_in(&test, account).await;

    let result = uk_nation(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(location(&resp), "/error?statusCode=403");

    Ok(())
}

#[tokio::test]
/// Switching the feature off closes the pages for everyone
async fn forbidden_when_feature_disabled() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::approved_user_account()).await;
    let mut state = test.into_app_state();
    state.features.allow_company_details_changes = false;

    let result = uk_nation(State(state), test.session.clone()).await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(location(&resp), "/error?statusCode=403");

    Ok(())
}

#[tokio::test]
/// The organisation's current nation is preselected
async fn preselects_current_nation() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::approved_user_account()).await;

    let result = uk_nation(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap();

    let Page::UkNation(model) = page(result) else {
        panic!("Expected the nation page");
    };
    assert_eq!(model.selected, Some(Nation::England));
    assert_eq!(model.back_link, page::MANAGE_ACCOUNT);

    Ok(())
}

#[tokio::test]
async fn requires_nation_choice() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::delegated_user_account()).await;

    let result = submit_uk_nation(
        State(test.into_app_state()),
        test.session.clone(),
        Form(UkNationForm { uk_nation: None }),
    )
    .await
    .unwrap();

    let Page::UkNation(model) = page(result) else {
        panic!("Expected the nation page");
    };
    assert!(model.errors.error_for("uk_nation").is_some());

    Ok(())
}

#[tokio::test]
/// Lookup, pick an address, confirm: the facade is updated and so is the session
async fn updates_details_from_lookup() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_address_lookup_endpoint("SW1A 2AA", factory::address_list(3), 1)
        .with_organisation_update_endpoint(TEST_ORGANISATION_ID, 200, 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();
    choose_nation(&state, &test, "Scotland").await;

    let result = submit_business_address_postcode(
        State(state.clone()),
        test.session.clone(),
        postcode_form("sw1a2aa"),
    )
    .await
    .unwrap();
    assert_eq!(result.redirect_location(), Some(page::SELECT_BUSINESS_ADDRESS));

    let result = select_business_address(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    let Page::SelectBusinessAddress(model) = page(result) else {
        panic!("Expected the address list");
    };
    assert_eq!(model.addresses.len(), 3);
    assert_eq!(model.addresses[1], "2 Downing Street, London, SW1A 2AA");

    let result = submit_select_business_address(
        State(state.clone()),
        test.session.clone(),
        Form(SelectBusinessAddressForm {
            selected_index: Some("1".to_string()),
        }),
    )
    .await
    .unwrap();
    assert_eq!(result.redirect_location(), Some(page::CHECK_COMPANY_DETAILS));

    let result = check_company_details(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    let Page::CheckCompanyDetails(model) = page(result) else {
        panic!("Expected the check page");
    };
    assert_eq!(model.nation, Nation::Scotland);
    assert_eq!(model.back_link, page::SELECT_BUSINESS_ADDRESS);

    let result = submit_check_company_details(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    assert_eq!(result.redirect_location(), Some(page::COMPANY_DETAILS_UPDATED));

    let user = SessionUserData::get(&test.session).await.unwrap().unwrap();
    let organisation = user.current_organisation().unwrap();
    assert_eq!(organisation.nation(), Some(Nation::Scotland));
    assert_eq!(organisation.address.building_number.as_deref(), Some("2"));

    let journey = JourneySession::get(&test.session).await.unwrap();
    assert_eq!(journey.account_management.uk_nation, None);
    assert!(journey.account_management.address_list.is_empty());

    let result = company_details_updated(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    assert!(matches!(page(result), Page::CompanyDetailsUpdated(_)));

    // The confirmation is one-shot
    let result = company_details_updated(State(state), test.session.clone())
        .await
        .unwrap();
    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// A postcode with no addresses is reported on the postcode page
async fn reports_unknown_postcode() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_address_lookup_endpoint("SW1A 2AA", factory::address_list(0), 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();
    choose_nation(&state, &test, "England").await;

    let result = submit_business_address_postcode(
        State(state),
        test.session.clone(),
        postcode_form("SW1A 2AA"),
    )
    .await
    .unwrap();

    let Page::BusinessAddressPostcode(model) = page(result) else {
        panic!("Expected the postcode page");
    };
    assert!(model.errors.error_for("postcode").is_some());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// A failed lookup falls back to entering the address by hand
async fn falls_back_to_manual_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_address_lookup_failure(1)
        .with_organisation_update_endpoint(TEST_ORGANISATION_ID, 200, 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();
    choose_nation(&state, &test, "Wales").await;

    let result = submit_business_address_postcode(
        State(state.clone()),
        test.session.clone(),
        postcode_form("CF10 1EP"),
    )
    .await
    .unwrap();
    assert_eq!(result.redirect_location(), Some(page::BUSINESS_ADDRESS));

    let result = business_address(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    let Page::BusinessAddress(model) = page(result) else {
        panic!("Expected the address form");
    };
    assert!(model.show_lookup_failed_warning);
    assert_eq!(model.address.postcode.as_deref(), Some("CF10 1EP"));
    assert_eq!(model.back_link, page::BUSINESS_ADDRESS_POSTCODE);

    let result = submit_business_address(
        State(state.clone()),
        test.session.clone(),
        Form(BusinessAddressForm {
            building_number: Some("1".to_string()),
            building_name: None,
            street: Some("Bute Place".to_string()),
            town: Some("Cardiff".to_string()),
            county: None,
            postcode: Some("cf10 1ep".to_string()),
        }),
    )
    .await
    .unwrap();
    assert_eq!(result.redirect_location(), Some(page::CHECK_COMPANY_DETAILS));

    let result = check_company_details(State(state.clone()), test.session.clone())
        .await
        .unwrap();
    let Page::CheckCompanyDetails(model) = page(result) else {
        panic!("Expected the check page");
    };
    assert_eq!(
        model.address_lines,
        vec!["1 Bute Place", "Cardiff", "CF10 1EP"]
    );

    let result = submit_check_company_details(State(state), test.session.clone())
        .await
        .unwrap();
    assert_eq!(result.redirect_location(), Some(page::COMPANY_DETAILS_UPDATED));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn manual_address_requires_street_and_town() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();
    choose_nation(&state, &test, "England").await;
    business_address(State(state.clone()), test.session.clone())
        .await
        .unwrap();

    let result = submit_business_address(
        State(state),
        test.session.clone(),
        Form(BusinessAddressForm {
            postcode: Some("BS1 4DJ".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    let Page::BusinessAddress(model) = page(result) else {
        panic!("Expected the address form");
    };
    assert_eq!(model.errors.error_for("street"), Some("Enter the street"));
    assert_eq!(model.errors.error_for("town"), Some("Enter the town or city"));
    assert!(model.errors.error_for("postcode").is_none());

    Ok(())
}

#[tokio::test]
/// The postcode page cannot be reached without choosing a nation first
async fn postcode_page_requires_journey() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    sign_in(&test, factory::approved_user_account()).await;

    let result = business_address_postcode(State(test.into_app_state()), test.session.clone())
        .await
        .unwrap();

    assert_eq!(result.redirect_location(), Some(page::MANAGE_ACCOUNT));

    Ok(())
}

#[tokio::test]
/// An index outside the looked-up list re-renders the list with an error
async fn rejects_out_of_range_address() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_address_lookup_endpoint("SW1A 2AA", factory::address_list(2), 1)
        .build()
        .await?;
    sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();
    look_up_addresses(&state, &test).await;

    let result = submit_select_business_address(
        State(state),
        test.session.clone(),
        select_form("2"),
    )
    .await
    .unwrap();

    let Page::SelectBusinessAddress(model) = page(result) else {
        panic!("Expected the address list");
    };
    assert_eq!(
        model.errors.error_for("selected_index"),
        Some("Select your business address")
    );
    assert_eq!(model.addresses.len(), 2);
    let journey = JourneySession::get(&test.session).await.unwrap();
    assert_eq!(journey.account_management.business_address, None);

    Ok(())
}

#[tokio::test]
/// A failed organisation update goes to the 500 page and leaves the session untouched
async fn update_failure_shows_error_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_address_lookup_endpoint("SW1A 2AA", factory::address_list(2), 1)
        .with_organisation_update_endpoint(TEST_ORGANISATION_ID, 500, 1)
        .build()
        .await?;
    let before = sign_in(&test, factory::approved_user_account()).await;
    let state = test.into_app_state();
    look_up_addresses(&state, &test).await;
    submit_select_business_address(State(state.clone()), test.session.clone(), select_form("0"))
        .await
        .unwrap();

    let resp = submit_check_company_details(State(state), test.session.clone())
        .await
        .unwrap_err()
        .into_response();

    assert_eq!(location(&resp), "/error?statusCode=500");
    let user = SessionUserData::get(&test.session).await.unwrap().unwrap();
    assert_eq!(user, before);
    let journey = JourneySession::get(&test.session).await.unwrap();
    assert!(journey.account_management.business_address.is_some());
    test.assert_mocks();

    Ok(())
}
