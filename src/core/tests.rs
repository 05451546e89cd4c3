#[cfg(test)]
mod tests {
    use crate::core::{
        AccountType, FormMode, FormState, INDIA_REGIONS, Region, localities_for,
    };

    // Two regions sharing a locality name, to check that a still-valid
    // selection is not preserved across a region change.
    static OVERLAPPING_REGIONS: &[Region] = &[
        Region {
            name: "North",
            localities: &["Springfield", "Riverton", "Hillcrest"],
        },
        Region {
            name: "South",
            localities: &["Springfield", "Bayside"],
        },
    ];

    #[test]
    fn test_fresh_state_defaults() {
        let form = FormState::new(INDIA_REGIONS);

        assert_eq!(form.mode(), FormMode::SignIn);
        assert_eq!(form.email(), "");
        assert_eq!(form.password(), "");
        assert!(!form.password_visible());
        assert_eq!(form.account_type(), AccountType::Personal);
        assert_eq!(form.full_name(), "");
        assert_eq!(form.phone(), "");
        assert_eq!(form.street(), "");
        assert_eq!(form.region(), "");
        assert_eq!(form.locality(), "");
        assert_eq!(form.postal_code(), "");
        assert!(form.available_localities().is_empty());
    }

    #[test]
    fn test_select_region_populates_localities_in_table_order() {
        let mut form = FormState::new(INDIA_REGIONS);

        for region in INDIA_REGIONS {
            form.set_region(region.name);
            assert_eq!(form.available_localities(), region.localities);
        }
    }

    #[test]
    fn test_select_region_resets_locality() {
        let mut form = FormState::new(INDIA_REGIONS);

        form.set_region("Karnataka");
        form.set_locality("Bengaluru");
        assert_eq!(form.locality(), "Bengaluru");

        form.set_region("Kerala");
        assert_eq!(form.locality(), "");
        assert_eq!(
            form.available_localities(),
            &["Thiruvananthapuram", "Kochi", "Kozhikode", "Thrissur"]
        );
    }

    #[test]
    fn test_reselect_same_region_resets_locality() {
        let mut form = FormState::new(INDIA_REGIONS);

        form.set_region("Gujarat");
        form.set_locality("Surat");

        form.set_region("Gujarat");
        assert_eq!(form.locality(), "");
    }

    #[test]
    fn test_region_change_resets_locality_even_if_still_listed() {
        let mut form = FormState::new(OVERLAPPING_REGIONS);

        form.set_region("North");
        form.set_locality("Springfield");

        // "Springfield" is also offered under South, but the selection is
        // cleared regardless.
        form.set_region("South");
        assert_eq!(form.locality(), "");
        assert!(form.available_localities().contains(&"Springfield"));
    }

    #[test]
    fn test_unknown_region_gives_empty_localities() {
        let mut form = FormState::new(INDIA_REGIONS);

        form.set_region("Karnataka");
        form.set_locality("Mysuru");

        form.set_region("Atlantis");
        assert!(form.available_localities().is_empty());
        assert_eq!(form.locality(), "");
    }

    #[test]
    fn test_clearing_region_gives_empty_localities() {
        let mut form = FormState::new(INDIA_REGIONS);

        form.set_region("Rajasthan");
        form.set_locality("Jaipur");

        form.set_region("");
        assert!(form.available_localities().is_empty());
        assert_eq!(form.locality(), "");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(!localities_for(INDIA_REGIONS, "Maharashtra").is_empty());
        assert!(localities_for(INDIA_REGIONS, "maharashtra").is_empty());
        assert!(localities_for(INDIA_REGIONS, " Maharashtra").is_empty());
        assert!(localities_for(INDIA_REGIONS, "").is_empty());
    }

    #[test]
    fn test_region_table_shape() {
        assert_eq!(INDIA_REGIONS.len(), 10);

        for region in INDIA_REGIONS {
            assert!(!region.name.is_empty());
            assert!(
                (3..=12).contains(&region.localities.len()),
                "{} has {} localities",
                region.name,
                region.localities.len()
            );
        }
    }

    #[test]
    fn test_sign_in_submission_has_empty_address() {
        let mut form = FormState::new(INDIA_REGIONS);
        form.set_email("asha@example.com");
        form.set_password("hunter2");

        // Address fields entered earlier must not leak into a sign-in submit.
        form.set_mode(FormMode::Register);
        form.set_street("Flat 1");
        form.set_region("Maharashtra");
        form.set_locality("Pune");
        form.set_postal_code("411001");
        form.set_mode(FormMode::SignIn);

        let submission = form.submission();
        assert_eq!(submission.address, "");
        assert_eq!(submission.email, "asha@example.com");
        assert_eq!(submission.password, "hunter2");
    }

    #[test]
    fn test_register_submission_composes_address() {
        let mut form = FormState::new(INDIA_REGIONS);
        form.set_mode(FormMode::Register);
        form.set_street("Flat 1");
        form.set_region("Maharashtra");
        form.set_locality("Andheri");
        form.set_postal_code("400001");

        let submission = form.submission();
        assert_eq!(submission.address, "Flat 1, Andheri, Maharashtra - 400001");
    }

    #[test]
    fn test_register_submission_keeps_empty_subfields() {
        let mut form = FormState::new(INDIA_REGIONS);
        form.set_mode(FormMode::Register);
        form.set_region("Maharashtra");
        form.set_locality("Thane");
        form.set_postal_code("400601");

        // No trimming or presence checks: an empty street yields a leading ", ".
        let submission = form.submission();
        assert!(submission.address.starts_with(", "));
        assert_eq!(submission.address, ", Thane, Maharashtra - 400601");
    }

    #[test]
    fn test_mode_toggle_preserves_fields() {
        let mut form = FormState::new(INDIA_REGIONS);
        form.set_mode(FormMode::Register);
        form.set_email("dev@example.com");
        form.set_password("secret");
        form.set_full_name("Rahul Sharma");
        form.set_phone("+91 98765 43210");
        form.set_account_type(AccountType::Business);
        form.set_region("Telangana");
        form.set_locality("Hyderabad");
        form.set_street("12 Jubilee Hills");
        form.set_postal_code("500033");

        form.set_mode(FormMode::SignIn);
        form.set_mode(FormMode::Register);

        assert_eq!(form.email(), "dev@example.com");
        assert_eq!(form.password(), "secret");
        assert_eq!(form.full_name(), "Rahul Sharma");
        assert_eq!(form.phone(), "+91 98765 43210");
        assert_eq!(form.account_type(), AccountType::Business);
        assert_eq!(form.region(), "Telangana");
        assert_eq!(form.locality(), "Hyderabad");
        assert_eq!(form.street(), "12 Jubilee Hills");
        assert_eq!(form.postal_code(), "500033");
    }

    #[test]
    fn test_stale_register_fields_survive_in_sign_in_payload() {
        let mut form = FormState::new(INDIA_REGIONS);
        form.set_mode(FormMode::Register);
        form.set_full_name("Meera Iyer");
        form.set_phone("+91 90000 00001");
        form.set_account_type(AccountType::Business);

        // Switching back to sign-in does not clear the register-only fields;
        // they ride along in the payload with the address forced to empty.
        form.set_mode(FormMode::SignIn);
        let submission = form.submission();

        assert_eq!(submission.name, "Meera Iyer");
        assert_eq!(submission.phone, "+91 90000 00001");
        assert_eq!(submission.account_type, AccountType::Business);
        assert_eq!(submission.address, "");
    }

    #[test]
    fn test_password_visibility_toggle_preserves_password() {
        let mut form = FormState::new(INDIA_REGIONS);
        form.set_password("s3cret!");

        form.toggle_password_visibility();
        assert!(form.password_visible());
        assert_eq!(form.password(), "s3cret!");

        form.toggle_password_visibility();
        assert!(!form.password_visible());
        assert_eq!(form.password(), "s3cret!");
    }

    #[test]
    fn test_submission_wire_shape() {
        let mut form = FormState::new(INDIA_REGIONS);
        form.set_mode(FormMode::Register);
        form.set_email("shop@example.com");
        form.set_password("pw");
        form.set_full_name("Kiran Rao");
        form.set_phone("+91 91234 56789");
        form.set_street("Shop 4, MG Road");
        form.set_region("Karnataka");
        form.set_locality("Bengaluru");
        form.set_postal_code("560001");
        form.set_account_type(AccountType::Business);

        let value = serde_json::to_value(form.submission()).unwrap();
        assert_eq!(value["email"], "shop@example.com");
        assert_eq!(value["name"], "Kiran Rao");
        assert_eq!(value["phone"], "+91 91234 56789");
        assert_eq!(value["address"], "Shop 4, MG Road, Bengaluru, Karnataka - 560001");
        assert_eq!(value["accountType"], "business");

        form.set_account_type(AccountType::Personal);
        let value = serde_json::to_value(form.submission()).unwrap();
        assert_eq!(value["accountType"], "user");
    }

    #[test]
    fn test_account_type_wire_names() {
        assert_eq!(AccountType::Personal.as_str(), "user");
        assert_eq!(AccountType::Business.as_str(), "business");
        assert_eq!(AccountType::default(), AccountType::Personal);
    }
}
