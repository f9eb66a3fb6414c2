/// Fixed reference catalogs: financing schemes, the installer directory and
/// the display languages the client can render. Static configuration data,
/// not computed state — nothing here has a lifecycle.
use std::sync::LazyLock;

use crate::models::directory::InstallerCompany;
use crate::models::language::DisplayLanguage;
use crate::models::loan::LoanScheme;

static LOAN_SCHEMES: LazyLock<Vec<LoanScheme>> = LazyLock::new(|| {
    vec![
        LoanScheme {
            id: 1,
            name: "Solar Home Finance".to_string(),
            annual_interest_rate_percent: 7.5,
            max_tenure_years: 15,
            max_amount_inr: 2_000_000.0,
            description: "Special financing for residential solar installations".to_string(),
        },
        LoanScheme {
            id: 2,
            name: "Green Energy Loan".to_string(),
            annual_interest_rate_percent: 8.0,
            max_tenure_years: 10,
            max_amount_inr: 1_500_000.0,
            description: "Quick approval solar panel financing solution".to_string(),
        },
        LoanScheme {
            id: 3,
            name: "Eco-Friendly Finance".to_string(),
            annual_interest_rate_percent: 6.9,
            max_tenure_years: 12,
            max_amount_inr: 2_500_000.0,
            description: "Low interest rates for sustainable energy projects".to_string(),
        },
    ]
});

static INSTALLERS: LazyLock<Vec<InstallerCompany>> = LazyLock::new(|| {
    vec![
        InstallerCompany {
            id: 1,
            name: "SolarTech India".to_string(),
            description: "Leading solar solutions provider with 15+ years of experience".to_string(),
            contact: "+91 98765 43210".to_string(),
            email: "contact@solartech.in".to_string(),
            rating: 4.8,
            image_url: "https://images.unsplash.com/photo-1509391366360-2e959784a276?w=800".to_string(),
        },
        InstallerCompany {
            id: 2,
            name: "GreenSun Solutions".to_string(),
            description: "Specialized in residential and commercial solar installations".to_string(),
            contact: "+91 98765 43211".to_string(),
            email: "info@greensun.in".to_string(),
            rating: 4.7,
            image_url: "https://images.unsplash.com/photo-1508514177221-188b1cf16e9d?w=800".to_string(),
        },
        InstallerCompany {
            id: 3,
            name: "EcoSolar Systems".to_string(),
            description: "Eco-friendly solar solutions for sustainable future".to_string(),
            contact: "+91 98765 43212".to_string(),
            email: "support@ecosolar.in".to_string(),
            rating: 4.9,
            image_url: "https://images.unsplash.com/photo-1559302995-f1d6d0cb6c8e?w=800".to_string(),
        },
    ]
});

static LANGUAGES: LazyLock<Vec<DisplayLanguage>> = LazyLock::new(|| {
    vec![
        DisplayLanguage {
            code: "en".to_string(),
            label: "English".to_string(),
        },
        DisplayLanguage {
            code: "hi".to_string(),
            label: "हिंदी".to_string(),
        },
    ]
});

pub fn loan_schemes() -> &'static [LoanScheme] {
    &LOAN_SCHEMES
}

pub fn loan_scheme_by_id(id: u32) -> Option<&'static LoanScheme> {
    LOAN_SCHEMES.iter().find(|scheme| scheme.id == id)
}

pub fn installers() -> &'static [InstallerCompany] {
    &INSTALLERS
}

pub fn display_languages() -> &'static [DisplayLanguage] {
    &LANGUAGES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_lookup_by_id() {
        let scheme = loan_scheme_by_id(2).unwrap();
        assert_eq!(scheme.name, "Green Energy Loan");
        assert_eq!(scheme.annual_interest_rate_percent, 8.0);
        assert!(loan_scheme_by_id(99).is_none());
    }

    #[test]
    fn scheme_ids_are_unique() {
        let mut ids: Vec<u32> = loan_schemes().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), loan_schemes().len());
    }

    #[test]
    fn all_catalog_rates_are_positive() {
        // The amortizer's zero-rate guard is never exercised by catalog data
        assert!(loan_schemes()
            .iter()
            .all(|s| s.annual_interest_rate_percent > 0.0));
    }

    #[test]
    fn directory_and_languages_are_populated() {
        assert_eq!(installers().len(), 3);
        assert!(installers().iter().all(|c| c.email.contains('@')));
        let codes: Vec<&str> = display_languages().iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "hi"]);
    }
}
