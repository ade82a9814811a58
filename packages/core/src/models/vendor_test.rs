//! Tests for the Vendor commission model

#[cfg(test)]
mod tests {
    use crate::models::{
        CommissionSchedule, Percentage, Rank, Vendor, VendorRecord, LEVEL_UP_LABEL,
        PERSONAL_LABEL,
    };

    fn schedule() -> CommissionSchedule {
        CommissionSchedule::default()
    }

    #[test]
    fn test_new_vendor_has_no_rank_change() {
        let vendor = Vendor::new(1000, "Joseph", Rank::Plata, 700_000.0);

        assert_eq!(vendor.previous_rank(), Rank::Plata);
        assert_eq!(vendor.current_rank(), Rank::Plata);
        assert_eq!(vendor.parent_id(), 0);
        assert!(!vendor.leveled_up());
        assert_eq!(vendor.commission(), 0.0);
        assert!(vendor.personal_commission().is_sign_positive());
        assert!(vendor.commission().is_sign_positive());
        assert_eq!(vendor.commission_description(), "");
    }

    #[test]
    fn test_set_current_rank_keeps_one_step_history() {
        let mut vendor = Vendor::new(1000, "Joseph", Rank::Cobre, 100_000.0);

        vendor.set_current_rank(Rank::Bronce);
        assert_eq!(vendor.previous_rank(), Rank::Cobre);
        assert_eq!(vendor.current_rank(), Rank::Bronce);

        vendor.set_current_rank(Rank::Oro);
        assert_eq!(vendor.previous_rank(), Rank::Bronce);
        assert_eq!(vendor.current_rank(), Rank::Oro);
    }

    #[test]
    fn test_personal_commission_by_rank() {
        let cases = [
            (Rank::Cobre, "10% personal", 10_000.0),
            (Rank::Bronce, "15% personal", 15_000.0),
            (Rank::Plata, "20% personal", 20_000.0),
            (Rank::Oro, "25% personal", 25_000.0),
        ];

        for (rank, description, commission) in cases {
            let mut vendor = Vendor::new(1, "Ana", rank, 100_000.0);
            vendor.assign_personal_commission(&schedule());

            assert_eq!(vendor.commission_description(), description);
            assert_eq!(vendor.commission(), commission);
        }
    }

    #[test]
    fn test_personal_commission_overwrites() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Cobre, 100_000.0);
        vendor.assign_personal_commission(&schedule());

        vendor.set_current_rank(Rank::Plata);
        vendor.assign_personal_commission(&schedule());

        assert_eq!(
            vendor.commission_type(PERSONAL_LABEL),
            Some(Percentage::from_percent(20))
        );
        assert_eq!(vendor.personal_commission(), 20_000.0);
    }

    #[test]
    fn test_level_up_only_on_promotion() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Bronce, 200_000.0);

        vendor.assign_level_up_commission(&schedule());
        assert_eq!(vendor.commission_type(LEVEL_UP_LABEL), None);

        vendor.set_current_rank(Rank::Plata);
        vendor.assign_level_up_commission(&schedule());
        assert_eq!(
            vendor.commission_type(LEVEL_UP_LABEL),
            Some(Percentage::from_percent(10))
        );

        vendor.set_current_rank(Rank::Oro);
        vendor.assign_level_up_commission(&schedule());
        assert_eq!(
            vendor.commission_type(LEVEL_UP_LABEL),
            Some(Percentage::from_percent(15))
        );
    }

    #[test]
    fn test_level_up_removed_after_demotion() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Cobre, 200_000.0);

        vendor.set_current_rank(Rank::Bronce);
        vendor.assign_level_up_commission(&schedule());
        assert_eq!(vendor.commission_description(), "5% level up");

        vendor.set_current_rank(Rank::Cobre);
        vendor.assign_level_up_commission(&schedule());
        assert_eq!(vendor.commission_type(LEVEL_UP_LABEL), None);
        assert_eq!(vendor.commission_description(), "");
        assert_eq!(vendor.personal_commission(), 0.0);
    }

    #[test]
    fn test_level_commission_capped_at_three_levels() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Cobre, 0.0);
        vendor.assign_level_commission(&schedule(), 7);

        assert_eq!(
            vendor.commission_description(),
            "1% level 1 + 2% level 2 + 3% level 3"
        );
        assert_eq!(vendor.commission_type("level 4"), None);
    }

    #[test]
    fn test_level_commission_respects_max_level() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Cobre, 0.0);

        vendor.assign_level_commission(&schedule(), 0);
        assert_eq!(vendor.commission_description(), "");

        vendor.assign_level_commission(&schedule(), 2);
        assert_eq!(vendor.commission_description(), "1% level 1 + 2% level 2");
    }

    #[test]
    fn test_level_entries_do_not_count_as_personal() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Plata, 450_000.0);
        vendor.assign_personal_commission(&schedule());
        vendor.assign_level_commission(&schedule(), 3);

        assert_eq!(vendor.personal_commission(), 90_000.0);
        assert_eq!(vendor.commission(), 90_000.0);
    }

    #[test]
    fn test_custom_labels_count_as_personal() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Cobre, 100_000.0);
        vendor.set_commission_type("bonus", Percentage::from_percent(2));
        vendor.set_commission_type("level 7", Percentage::from_percent(1));
        vendor.set_commission_type("retired", Percentage::ZERO);

        assert_eq!(vendor.personal_commission(), 2_000.0);
        assert_eq!(vendor.commission_description(), "2% bonus + 1% level 7");
    }

    #[test]
    fn test_description_follows_assignment_order() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Plata, 450_000.0);
        vendor.set_current_rank(Rank::Oro);

        vendor.assign_level_up_commission(&schedule());
        vendor.assign_personal_commission(&schedule());
        vendor.assign_level_commission(&schedule(), 3);

        assert_eq!(
            vendor.commission_description(),
            "15% level up + 25% personal + 1% level 1 + 2% level 2 + 3% level 3"
        );

        // Rewriting a label keeps its position
        vendor.assign_personal_commission(&schedule());
        assert!(vendor
            .commission_description()
            .starts_with("15% level up + 25% personal"));
    }

    #[test]
    fn test_setters_feed_commission() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Bronce, 100_000.0);
        vendor.set_name("Ana Maria");
        vendor.set_sales_monthly(200_000.0);
        vendor.assign_personal_commission(&schedule());

        assert_eq!(vendor.name(), "Ana Maria");
        assert_eq!(vendor.personal_commission(), 30_000.0);

        let labels: Vec<(&str, Percentage)> = vendor.commission_types().collect();
        assert_eq!(labels, vec![(PERSONAL_LABEL, Percentage::from_percent(15))]);
        assert_eq!(vendor.commission_rate(PERSONAL_LABEL), 0.15);
    }

    #[test]
    fn test_unknown_label_is_zero() {
        let vendor = Vendor::new(1, "Ana", Rank::Plata, 450_000.0);

        assert_eq!(vendor.commission_type("level 2"), None);
        assert_eq!(vendor.commission_rate("level 2"), 0.0);
    }

    #[test]
    fn test_accumulated_commission_adds_to_total() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Plata, 450_000.0);
        vendor.assign_personal_commission(&schedule());

        vendor.add_level_commission(200_000.0);
        vendor.add_level_commission(43_900.0);

        assert_eq!(vendor.accumulated_commission(), 243_900.0);
        assert_eq!(vendor.commission(), 333_900.0);
    }

    #[test]
    fn test_report_uses_export_field_names() {
        let mut vendor = Vendor::new(1, "Ana", Rank::Bronce, 600_000.0);
        vendor.set_current_rank(Rank::Cobre);
        vendor.assign_personal_commission(&schedule());

        let report = vendor.to_report();
        assert_eq!(report.name, "Ana");
        assert_eq!(report.previous_rank, Rank::Bronce);
        assert_eq!(report.current_rank, Rank::Cobre);
        assert_eq!(report.commission, 60_000.0);
        assert_eq!(report.commission_description, "10% personal");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["prevrank"], "BRONCE");
        assert_eq!(json["currank"], "COBRE");
        assert_eq!(json["comision"], 60_000.0);
        assert_eq!(json["comisiondesc"], "10% personal");
    }

    #[test]
    fn test_vendor_from_record() {
        let record = VendorRecord::new(903000, "Camila", Rank::Bronce, 600_000.0, 901000);
        let vendor = Vendor::from(&record);

        assert_eq!(vendor.cedula(), 903000);
        assert_eq!(vendor.name(), "Camila");
        assert_eq!(vendor.current_rank(), Rank::Bronce);
        assert_eq!(vendor.previous_rank(), Rank::Bronce);
        assert_eq!(vendor.sales_monthly(), 600_000.0);
        assert_eq!(vendor.parent_id(), 901000);
    }
}
