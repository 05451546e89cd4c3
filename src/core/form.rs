//! Form state for the combined sign-in / sign-up form.
//!
//! Every field value lives in a single [`FormState`] record mutated through
//! named setters, so the cascading region → locality rule and the submission
//! payload can be exercised without any rendering layer attached.

use serde::Serialize;

use super::locations::{Region, localities_for};

/// Whether the form is collecting sign-in credentials only or full
/// registration details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    SignIn,
    Register,
}

impl FormMode {
    pub fn is_register(self) -> bool {
        matches!(self, FormMode::Register)
    }
}

/// Personal vs. business account selection, only meaningful in register mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AccountType {
    #[default]
    #[serde(rename = "user")]
    Personal,
    #[serde(rename = "business")]
    Business,
}

impl AccountType {
    /// Wire name used in the outbound payload.
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Personal => "user",
            AccountType::Business => "business",
        }
    }
}

/// Payload handed to the submit callback.
///
/// Carries whatever the form currently holds; in sign-in mode the address is
/// forced to the empty string while the remaining register-only fields keep
/// their stored values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
}

/// All field values of the form plus the mode flag.
///
/// Fields are private so that `region`, `locality`, and the derived
/// `available_localities` can only move together through [`FormState::set_region`].
#[derive(Debug, Clone)]
pub struct FormState {
    mode: FormMode,
    email: String,
    password: String,
    password_visible: bool,
    account_type: AccountType,
    full_name: String,
    phone: String,
    street: String,
    region: String,
    locality: String,
    postal_code: String,
    available_localities: &'static [&'static str],
    regions: &'static [Region],
}

impl FormState {
    /// Fresh state: sign-in mode, every field empty, password masked.
    pub fn new(regions: &'static [Region]) -> Self {
        Self {
            mode: FormMode::default(),
            email: String::new(),
            password: String::new(),
            password_visible: false,
            account_type: AccountType::default(),
            full_name: String::new(),
            phone: String::new(),
            street: String::new(),
            region: String::new(),
            locality: String::new(),
            postal_code: String::new(),
            available_localities: &[],
            regions,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Switch between sign-in and register. Already-entered field values are
    /// preserved across the switch.
    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Flip masked vs. plaintext rendering of the password input. The stored
    /// password value is never touched.
    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.account_type = account_type;
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn set_street(&mut self, street: impl Into<String>) {
        self.street = street.into();
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Change the selected region and re-derive the locality list.
    ///
    /// The locality is cleared on every call, even when the same region is
    /// re-selected or the previous locality would still be listed under the
    /// new region.
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
        self.available_localities = localities_for(self.regions, &self.region);
        self.locality.clear();
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn set_locality(&mut self, locality: impl Into<String>) {
        self.locality = locality.into();
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) {
        self.postal_code = postal_code.into();
    }

    /// Locality options for the currently selected region, in table order.
    /// Empty while no region is selected or the region is unknown.
    pub fn available_localities(&self) -> &'static [&'static str] {
        self.available_localities
    }

    /// Region table backing the State select.
    pub fn regions(&self) -> &'static [Region] {
        self.regions
    }

    /// Compose the outbound payload from the current field values.
    ///
    /// The address fields are only combined when registering; sign-in submits
    /// carry an empty address. Sub-fields are joined literally, without
    /// trimming or presence checks.
    pub fn submission(&self) -> Submission {
        let address = match self.mode {
            FormMode::SignIn => String::new(),
            FormMode::Register => format!(
                "{}, {}, {} - {}",
                self.street, self.locality, self.region, self.postal_code
            ),
        };

        Submission {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.full_name.clone(),
            phone: self.phone.clone(),
            address,
            account_type: self.account_type,
        }
    }
}
