//! Changing the nation and business address of the user's organisation.
//!
//! Only approved and delegated persons of organisations not registered with Companies
//! House may use these pages, and only while the feature is switched on.

use axum::{extract::State, Form};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        address::{Address, Nation},
        api::OrganisationUpdateRequest,
        user::UserData,
    },
    server::{
        controller::util::{
            get_user::{current_organisation, ensure_allowed, get_user_from_session},
            journey::{enter_journey, redirect_if_off_journey},
        },
        error::Error,
        model::{
            action::ActionResult,
            app::AppState,
            journey::Journey,
            page,
            session::{journey::JourneySession, user::SessionUserData},
            validation::{
                is_valid_uk_postcode, normalise_postcode, ModelState, ADDRESS_LINE_MAX_LENGTH,
                POSTCODE_MAX_LENGTH,
            },
        },
    },
    view::pages::company_details::{
        BusinessAddressPostcodeViewModel, BusinessAddressViewModel,
        CheckCompanyDetailsViewModel, CompanyDetailsUpdatedViewModel,
        SelectBusinessAddressViewModel, UkNationViewModel,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct UkNationForm {
    pub uk_nation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostcodeForm {
    pub postcode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SelectBusinessAddressForm {
    pub selected_index: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BusinessAddressForm {
    pub building_number: Option<String>,
    pub building_name: Option<String>,
    pub street: Option<String>,
    pub town: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
}

async fn company_details_editor(state: &AppState, session: &Session) -> Result<UserData, Error> {
    let user = get_user_from_session(session).await?;
    current_organisation(&user)?;
    ensure_allowed(
        state.features.allow_company_details_changes && user.can_change_company_details(),
        &user,
        "change company details",
    )?;

    Ok(user)
}

/// Validates a postcode field, returning it normalised when valid.
fn validate_postcode(errors: &mut ModelState, value: Option<&str>) -> String {
    let postcode = errors.require("postcode", value, "a postcode", POSTCODE_MAX_LENGTH);

    if errors.error_for("postcode").is_some() {
        return postcode;
    }
    if !is_valid_uk_postcode(&postcode) {
        errors.add("postcode", "Enter a full UK postcode, like SW1A 2AA");
        return postcode;
    }

    normalise_postcode(&postcode)
}

pub async fn uk_nation(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    let user = company_details_editor(&state, &session).await?;
    let organisation = current_organisation(&user)?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    enter_journey(&mut account.journey, page::UK_NATION);

    let model = UkNationViewModel {
        back_link: account.journey.back_link(page::UK_NATION),
        selected: account.uk_nation.or(organisation.nation()),
        errors: ModelState::new(),
    };
    journey.save(&session).await?;

    Ok(ActionResult::view(model))
}

pub async fn submit_uk_nation(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UkNationForm>,
) -> Result<ActionResult, Error> {
    company_details_editor(&state, &session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    enter_journey(&mut account.journey, page::UK_NATION);

    let Some(nation) = form
        .uk_nation
        .as_deref()
        .and_then(|value| value.parse::<Nation>().ok())
    else {
        let mut errors = ModelState::new();
        errors.add("uk_nation", "Select the UK nation your organisation is based in");

        return Ok(ActionResult::view(UkNationViewModel {
            back_link: account.journey.back_link(page::UK_NATION),
            selected: None,
            errors,
        }));
    };

    account.uk_nation = Some(nation);
    account
        .journey
        .add_to_journey(page::UK_NATION, page::BUSINESS_ADDRESS_POSTCODE);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::BUSINESS_ADDRESS_POSTCODE))
}

pub async fn business_address_postcode(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    company_details_editor(&state, &session).await?;

    let journey = JourneySession::get(&session).await?;
    let account = &journey.account_management;
    if let Some(redirect) =
        redirect_if_off_journey(&account.journey, page::BUSINESS_ADDRESS_POSTCODE)
    {
        return Ok(redirect);
    }

    Ok(ActionResult::view(BusinessAddressPostcodeViewModel {
        back_link: account.journey.back_link(page::BUSINESS_ADDRESS_POSTCODE),
        postcode: account.postcode.clone().unwrap_or_default(),
        errors: ModelState::new(),
    }))
}

/// Looks up the addresses at the postcode.
///
/// When the lookup itself fails the user is sent to enter the address by hand instead of
/// seeing an error page.
pub async fn submit_business_address_postcode(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PostcodeForm>,
) -> Result<ActionResult, Error> {
    company_details_editor(&state, &session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if let Some(redirect) =
        redirect_if_off_journey(&account.journey, page::BUSINESS_ADDRESS_POSTCODE)
    {
        return Ok(redirect);
    }

    let mut errors = ModelState::new();
    let postcode = validate_postcode(&mut errors, form.postcode.as_deref());

    if errors.is_valid() {
        account.postcode = Some(postcode.clone());
        account.business_address = None;
        account.is_manual_address = false;

        match state.facade.get_address_list_by_postcode(&postcode).await {
            Ok(addresses) if addresses.is_empty() => {
                errors.add(
                    "postcode",
                    "We could not find an address for that postcode. Check the postcode or enter the address manually",
                );
            }
            Ok(addresses) => {
                account.address_list = addresses;
                account.address_lookup_failed = false;
                account
                    .journey
                    .add_to_journey(page::BUSINESS_ADDRESS_POSTCODE, page::SELECT_BUSINESS_ADDRESS);
                journey.save(&session).await?;

                return Ok(ActionResult::redirect(page::SELECT_BUSINESS_ADDRESS));
            }
            Err(err) => {
                tracing::warn!("Address lookup failed, falling back to manual entry: {}", err);

                account.address_list.clear();
                account.address_lookup_failed = true;
                account
                    .journey
                    .add_to_journey(page::BUSINESS_ADDRESS_POSTCODE, page::BUSINESS_ADDRESS);
                journey.save(&session).await?;

                return Ok(ActionResult::redirect(page::BUSINESS_ADDRESS));
            }
        }
    }

    let model = BusinessAddressPostcodeViewModel {
        back_link: account.journey.back_link(page::BUSINESS_ADDRESS_POSTCODE),
        postcode,
        errors,
    };
    journey.save(&session).await?;

    Ok(ActionResult::view(model))
}

pub async fn select_business_address(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    company_details_editor(&state, &session).await?;

    let journey = JourneySession::get(&session).await?;
    let account = &journey.account_management;
    if let Some(redirect) = redirect_if_off_journey(&account.journey, page::SELECT_BUSINESS_ADDRESS)
    {
        return Ok(redirect);
    }
    if account.address_list.is_empty() {
        return Ok(ActionResult::redirect(page::BUSINESS_ADDRESS_POSTCODE));
    }

    Ok(ActionResult::view(SelectBusinessAddressViewModel {
        back_link: account.journey.back_link(page::SELECT_BUSINESS_ADDRESS),
        postcode: account.postcode.clone().unwrap_or_default(),
        addresses: account.address_list.iter().map(Address::single_line).collect(),
        errors: ModelState::new(),
    }))
}

pub async fn submit_select_business_address(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SelectBusinessAddressForm>,
) -> Result<ActionResult, Error> {
    company_details_editor(&state, &session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if let Some(redirect) = redirect_if_off_journey(&account.journey, page::SELECT_BUSINESS_ADDRESS)
    {
        return Ok(redirect);
    }
    if account.address_list.is_empty() {
        return Ok(ActionResult::redirect(page::BUSINESS_ADDRESS_POSTCODE));
    }

    let selected = form
        .selected_index
        .as_deref()
        .and_then(|value| value.parse::<usize>().ok())
        .and_then(|index| account.address_list.get(index).cloned());

    let Some(address) = selected else {
        let mut errors = ModelState::new();
        errors.add("selected_index", "Select your business address");

        return Ok(ActionResult::view(SelectBusinessAddressViewModel {
            back_link: account.journey.back_link(page::SELECT_BUSINESS_ADDRESS),
            postcode: account.postcode.clone().unwrap_or_default(),
            addresses: account.address_list.iter().map(Address::single_line).collect(),
            errors,
        }));
    };

    account.business_address = Some(address);
    account.is_manual_address = false;
    account
        .journey
        .add_to_journey(page::SELECT_BUSINESS_ADDRESS, page::CHECK_COMPANY_DETAILS);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::CHECK_COMPANY_DETAILS))
}

/// Manual address entry, reached from the postcode or address list pages or after a
/// failed lookup.
pub async fn business_address(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    company_details_editor(&state, &session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if !account.journey.contains_page(page::BUSINESS_ADDRESS) {
        let previous = if account.journey.contains_page(page::SELECT_BUSINESS_ADDRESS) {
            page::SELECT_BUSINESS_ADDRESS
        } else {
            page::BUSINESS_ADDRESS_POSTCODE
        };

        if let Some(redirect) = redirect_if_off_journey(&account.journey, previous) {
            return Ok(redirect);
        }
        account.journey.add_to_journey(previous, page::BUSINESS_ADDRESS);
    }

    let address = match &account.business_address {
        Some(address) if account.is_manual_address => address.clone(),
        _ => Address {
            postcode: account.postcode.clone(),
            ..Default::default()
        },
    };

    let model = BusinessAddressViewModel {
        back_link: account.journey.back_link(page::BUSINESS_ADDRESS),
        address,
        show_lookup_failed_warning: account.address_lookup_failed,
        errors: ModelState::new(),
    };
    journey.save(&session).await?;

    Ok(ActionResult::view(model))
}

pub async fn submit_business_address(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<BusinessAddressForm>,
) -> Result<ActionResult, Error> {
    company_details_editor(&state, &session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if let Some(redirect) = redirect_if_off_journey(&account.journey, page::BUSINESS_ADDRESS) {
        return Ok(redirect);
    }

    let mut errors = ModelState::new();
    let building_number = errors.optional(
        "building_number",
        form.building_number.as_deref(),
        "building number",
        ADDRESS_LINE_MAX_LENGTH,
    );
    let building_name = errors.optional(
        "building_name",
        form.building_name.as_deref(),
        "building name",
        ADDRESS_LINE_MAX_LENGTH,
    );
    let street = errors.require(
        "street",
        form.street.as_deref(),
        "the street",
        ADDRESS_LINE_MAX_LENGTH,
    );
    let town = errors.require(
        "town",
        form.town.as_deref(),
        "the town or city",
        ADDRESS_LINE_MAX_LENGTH,
    );
    let county = errors.optional(
        "county",
        form.county.as_deref(),
        "county",
        ADDRESS_LINE_MAX_LENGTH,
    );
    let postcode = validate_postcode(&mut errors, form.postcode.as_deref());

    let address = Address {
        sub_building_name: None,
        building_name,
        building_number,
        street: Some(street),
        locality: None,
        town: Some(town),
        county,
        postcode: Some(postcode),
    };

    if !errors.is_valid() {
        return Ok(ActionResult::view(BusinessAddressViewModel {
            back_link: account.journey.back_link(page::BUSINESS_ADDRESS),
            address,
            show_lookup_failed_warning: account.address_lookup_failed,
            errors,
        }));
    }

    account.business_address = Some(address);
    account.is_manual_address = true;
    account
        .journey
        .add_to_journey(page::BUSINESS_ADDRESS, page::CHECK_COMPANY_DETAILS);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::CHECK_COMPANY_DETAILS))
}

pub async fn check_company_details(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    company_details_editor(&state, &session).await?;

    let journey = JourneySession::get(&session).await?;
    let account = &journey.account_management;
    if let Some(redirect) = redirect_if_off_journey(&account.journey, page::CHECK_COMPANY_DETAILS) {
        return Ok(redirect);
    }
    let (Some(nation), Some(address)) = (account.uk_nation, &account.business_address) else {
        return Ok(ActionResult::redirect(page::UK_NATION));
    };

    Ok(ActionResult::view(CheckCompanyDetailsViewModel {
        back_link: account.journey.back_link(page::CHECK_COMPANY_DETAILS),
        nation,
        address_lines: address.lines(),
    }))
}

/// Saves the new details with the facade and mirrors them into the session's user data.
pub async fn submit_check_company_details(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    let mut user = company_details_editor(&state, &session).await?;
    let organisation_id = current_organisation(&user)?.id;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if let Some(redirect) = redirect_if_off_journey(&account.journey, page::CHECK_COMPANY_DETAILS) {
        return Ok(redirect);
    }
    let (Some(nation), Some(address)) = (account.uk_nation, account.business_address.clone())
    else {
        return Ok(ActionResult::redirect(page::UK_NATION));
    };

    let update = OrganisationUpdateRequest {
        nation_id: nation.id(),
        address,
    };
    state
        .facade
        .update_organisation_details(user.id, organisation_id, &update)
        .await?;

    tracing::info!(
        "User {} updated company details of organisation {}",
        user.id,
        organisation_id
    );

    if let Some(organisation) = user.organisations.first_mut() {
        organisation.nation_id = Some(update.nation_id);
        organisation.address = update.address;
    }
    SessionUserData::insert(&session, &user).await?;

    account.clear_company_details();
    account
        .journey
        .add_to_journey(page::CHECK_COMPANY_DETAILS, page::COMPANY_DETAILS_UPDATED);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::COMPANY_DETAILS_UPDATED))
}

/// Confirmation shown once after the update; the journey ends here.
pub async fn company_details_updated(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    let user = company_details_editor(&state, &session).await?;
    let organisation = current_organisation(&user)?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if let Some(redirect) =
        redirect_if_off_journey(&account.journey, page::COMPANY_DETAILS_UPDATED)
    {
        return Ok(redirect);
    }

    account.journey.reset_to(page::MANAGE_ACCOUNT);
    journey.save(&session).await?;

    Ok(ActionResult::view(CompanyDetailsUpdatedViewModel {
        organisation_name: organisation.name.clone(),
    }))
}
