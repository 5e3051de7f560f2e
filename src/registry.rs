//! Authoritative country registry.
//!
//! One static table associates ISO 3166-1 numeric code, alpha-2 code,
//! canonical display name, and esports region per country. Every lookup
//! map (numeric->alpha2, the computed alpha2->numeric inverse,
//! name->alpha2 over canonical plus alternate names, name->numeric) is
//! derived from it exactly once at first use. The table is append-only
//! configuration data; nothing mutates it at runtime.
//!
//! Special cases: Kosovo (`XK`) carries the user-assigned alpha-2 code
//! and has no numeric code; Antarctica (`AQ`, numeric `010`) has a
//! numeric code and the standalone Antarctica region.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::region::Region;

#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    /// ISO 3166-1 numeric code as a zero-padded 3-digit string.
    /// Absent only for Kosovo.
    pub numeric: Option<&'static str>,
    /// ISO 3166-1 alpha-2 code, uppercase. `XK` is user-assigned.
    pub alpha2: &'static str,
    /// Canonical display name.
    pub name: &'static str,
    /// Esports region, or `None` when unassigned.
    pub region: Option<Region>,
}

const fn e(
    numeric: &'static str,
    alpha2: &'static str,
    name: &'static str,
    region: Option<Region>,
) -> RegistryEntry {
    RegistryEntry {
        numeric: Some(numeric),
        alpha2,
        name,
        region,
    }
}

use Region::{
    AfricaNonMena as AF, Antarctica as AN, Asia as AS, Europe as EU, Mena as ME,
    NorthAmerica as NA, Oceania as OC, SouthAmerica as SA,
};

/// Every country and territory the map can reference, ordered by
/// numeric code. Kosovo closes the table as the one entry without a
/// numeric code.
pub static ENTRIES: &[RegistryEntry] = &[
    e("004", "AF", "Afghanistan", Some(AS)),
    e("008", "AL", "Albania", Some(EU)),
    e("010", "AQ", "Antarctica", Some(AN)),
    e("012", "DZ", "Algeria", Some(ME)),
    e("020", "AD", "Andorra", Some(EU)),
    e("024", "AO", "Angola", Some(AF)),
    e("028", "AG", "Antigua and Barbuda", None),
    e("031", "AZ", "Azerbaijan", Some(ME)),
    e("032", "AR", "Argentina", Some(SA)),
    e("036", "AU", "Australia", Some(OC)),
    e("040", "AT", "Austria", Some(EU)),
    e("044", "BS", "Bahamas", None),
    e("048", "BH", "Bahrain", Some(ME)),
    e("050", "BD", "Bangladesh", Some(AS)),
    e("051", "AM", "Armenia", Some(ME)),
    e("052", "BB", "Barbados", None),
    e("056", "BE", "Belgium", Some(EU)),
    e("060", "BM", "Bermuda", None),
    e("064", "BT", "Bhutan", Some(AS)),
    e("068", "BO", "Bolivia", Some(SA)),
    e("070", "BA", "Bosnia and Herzegovina", Some(EU)),
    e("072", "BW", "Botswana", Some(AF)),
    e("076", "BR", "Brazil", Some(SA)),
    e("084", "BZ", "Belize", Some(NA)),
    e("090", "SB", "Solomon Islands", Some(OC)),
    e("096", "BN", "Brunei", Some(AS)),
    e("100", "BG", "Bulgaria", Some(EU)),
    e("104", "MM", "Myanmar", Some(AS)),
    e("108", "BI", "Burundi", Some(AF)),
    e("112", "BY", "Belarus", Some(EU)),
    e("116", "KH", "Cambodia", Some(AS)),
    e("120", "CM", "Cameroon", Some(AF)),
    e("124", "CA", "Canada", Some(NA)),
    e("132", "CV", "Cape Verde", Some(AF)),
    e("136", "KY", "Cayman Islands", None),
    e("140", "CF", "Central African Republic", Some(AF)),
    e("144", "LK", "Sri Lanka", Some(AS)),
    e("148", "TD", "Chad", Some(AF)),
    e("152", "CL", "Chile", Some(SA)),
    e("156", "CN", "China", Some(AS)),
    e("158", "TW", "Taiwan", Some(AS)),
    e("170", "CO", "Colombia", Some(SA)),
    e("174", "KM", "Comoros", Some(AF)),
    e("175", "YT", "Mayotte", None),
    e("178", "CG", "Congo", Some(AF)),
    e("180", "CD", "Democratic Republic of the Congo", Some(AF)),
    e("184", "CK", "Cook Islands", Some(OC)),
    e("188", "CR", "Costa Rica", Some(NA)),
    e("191", "HR", "Croatia", Some(EU)),
    e("192", "CU", "Cuba", Some(NA)),
    e("196", "CY", "Cyprus", Some(ME)),
    e("203", "CZ", "Czech Republic", Some(EU)),
    e("204", "BJ", "Benin", Some(AF)),
    e("208", "DK", "Denmark", Some(EU)),
    e("212", "DM", "Dominica", None),
    e("214", "DO", "Dominican Republic", Some(NA)),
    e("218", "EC", "Ecuador", Some(SA)),
    e("222", "SV", "El Salvador", Some(NA)),
    e("226", "GQ", "Equatorial Guinea", Some(AF)),
    e("231", "ET", "Ethiopia", Some(AF)),
    e("232", "ER", "Eritrea", Some(AF)),
    e("233", "EE", "Estonia", Some(EU)),
    e("234", "FO", "Faroe Islands", None),
    e("238", "FK", "Falkland Islands", Some(SA)),
    e("242", "FJ", "Fiji", Some(OC)),
    e("246", "FI", "Finland", Some(EU)),
    e("250", "FR", "France", Some(EU)),
    e("254", "GF", "French Guiana", Some(SA)),
    e("258", "PF", "French Polynesia", Some(OC)),
    e("260", "TF", "French Southern Territories", None),
    e("262", "DJ", "Djibouti", Some(AF)),
    e("266", "GA", "Gabon", Some(AF)),
    e("268", "GE", "Georgia", Some(ME)),
    e("270", "GM", "Gambia", Some(AF)),
    e("275", "PS", "Palestine", Some(ME)),
    e("276", "DE", "Germany", Some(EU)),
    e("288", "GH", "Ghana", Some(AF)),
    e("292", "GI", "Gibraltar", None),
    e("296", "KI", "Kiribati", Some(OC)),
    e("300", "GR", "Greece", Some(EU)),
    e("304", "GL", "Greenland", None),
    e("308", "GD", "Grenada", None),
    e("312", "GP", "Guadeloupe", None),
    e("316", "GU", "Guam", Some(OC)),
    e("320", "GT", "Guatemala", Some(NA)),
    e("324", "GN", "Guinea", Some(AF)),
    e("328", "GY", "Guyana", Some(SA)),
    e("332", "HT", "Haiti", Some(NA)),
    e("334", "HM", "Heard Island and McDonald Islands", None),
    e("336", "VA", "Vatican City", None),
    e("340", "HN", "Honduras", Some(NA)),
    e("344", "HK", "Hong Kong", None),
    e("348", "HU", "Hungary", Some(EU)),
    e("352", "IS", "Iceland", Some(EU)),
    e("356", "IN", "India", Some(AS)),
    e("360", "ID", "Indonesia", Some(AS)),
    e("364", "IR", "Iran", Some(ME)),
    e("368", "IQ", "Iraq", Some(ME)),
    e("372", "IE", "Ireland", Some(EU)),
    e("376", "IL", "Israel", Some(ME)),
    e("380", "IT", "Italy", Some(EU)),
    e("384", "CI", "Ivory Coast", Some(AF)),
    e("388", "JM", "Jamaica", Some(NA)),
    e("392", "JP", "Japan", Some(AS)),
    e("398", "KZ", "Kazakhstan", Some(AS)),
    e("400", "JO", "Jordan", Some(ME)),
    e("404", "KE", "Kenya", Some(AF)),
    e("408", "KP", "North Korea", Some(AS)),
    e("410", "KR", "South Korea", Some(AS)),
    e("414", "KW", "Kuwait", Some(ME)),
    e("417", "KG", "Kyrgyzstan", Some(AS)),
    e("418", "LA", "Laos", Some(AS)),
    e("422", "LB", "Lebanon", Some(ME)),
    e("426", "LS", "Lesotho", Some(AF)),
    e("428", "LV", "Latvia", Some(EU)),
    e("430", "LR", "Liberia", Some(AF)),
    e("434", "LY", "Libya", Some(ME)),
    e("438", "LI", "Liechtenstein", Some(EU)),
    e("440", "LT", "Lithuania", Some(EU)),
    e("442", "LU", "Luxembourg", Some(EU)),
    e("446", "MO", "Macao", None),
    e("450", "MG", "Madagascar", Some(AF)),
    e("454", "MW", "Malawi", Some(AF)),
    e("458", "MY", "Malaysia", Some(AS)),
    e("462", "MV", "Maldives", Some(AS)),
    e("466", "ML", "Mali", Some(AF)),
    e("470", "MT", "Malta", Some(EU)),
    e("474", "MQ", "Martinique", None),
    e("478", "MR", "Mauritania", Some(AF)),
    e("480", "MU", "Mauritius", Some(AF)),
    e("484", "MX", "Mexico", Some(NA)),
    e("492", "MC", "Monaco", Some(EU)),
    e("496", "MN", "Mongolia", Some(AS)),
    e("498", "MD", "Moldova", Some(EU)),
    e("499", "ME", "Montenegro", Some(EU)),
    e("500", "MS", "Montserrat", None),
    e("504", "MA", "Morocco", Some(ME)),
    e("508", "MZ", "Mozambique", Some(AF)),
    e("512", "OM", "Oman", Some(ME)),
    e("516", "NA", "Namibia", Some(AF)),
    e("520", "NR", "Nauru", Some(OC)),
    e("524", "NP", "Nepal", Some(AS)),
    e("528", "NL", "Netherlands", Some(EU)),
    e("540", "NC", "New Caledonia", Some(OC)),
    e("548", "VU", "Vanuatu", Some(OC)),
    e("554", "NZ", "New Zealand", Some(OC)),
    e("558", "NI", "Nicaragua", Some(NA)),
    e("562", "NE", "Niger", Some(AF)),
    e("566", "NG", "Nigeria", Some(AF)),
    e("570", "NU", "Niue", Some(OC)),
    e("574", "NF", "Norfolk Island", Some(OC)),
    e("578", "NO", "Norway", Some(EU)),
    e("580", "MP", "Northern Mariana Islands", Some(OC)),
    e("583", "FM", "Micronesia", Some(OC)),
    e("584", "MH", "Marshall Islands", Some(OC)),
    e("585", "PW", "Palau", Some(OC)),
    e("586", "PK", "Pakistan", Some(AS)),
    e("591", "PA", "Panama", Some(NA)),
    e("598", "PG", "Papua New Guinea", Some(OC)),
    e("600", "PY", "Paraguay", Some(SA)),
    e("604", "PE", "Peru", Some(SA)),
    e("608", "PH", "Philippines", Some(AS)),
    e("612", "PN", "Pitcairn", Some(OC)),
    e("616", "PL", "Poland", Some(EU)),
    e("620", "PT", "Portugal", Some(EU)),
    e("624", "GW", "Guinea-Bissau", Some(AF)),
    e("626", "TL", "Timor-Leste", Some(AS)),
    e("630", "PR", "Puerto Rico", None),
    e("634", "QA", "Qatar", Some(ME)),
    e("638", "RE", "Reunion", None),
    e("642", "RO", "Romania", Some(EU)),
    e("643", "RU", "Russia", Some(EU)),
    e("646", "RW", "Rwanda", Some(AF)),
    e("652", "BL", "Saint Barthelemy", None),
    e("654", "SH", "Saint Helena", None),
    e("659", "KN", "Saint Kitts and Nevis", None),
    e("660", "AI", "Anguilla", None),
    e("662", "LC", "Saint Lucia", None),
    e("663", "MF", "Saint Martin", None),
    e("666", "PM", "Saint Pierre and Miquelon", None),
    e("670", "VC", "Saint Vincent and the Grenadines", None),
    e("674", "SM", "San Marino", Some(EU)),
    e("678", "ST", "Sao Tome and Principe", None),
    e("682", "SA", "Saudi Arabia", Some(ME)),
    e("686", "SN", "Senegal", Some(AF)),
    e("688", "RS", "Serbia", Some(EU)),
    e("690", "SC", "Seychelles", Some(AF)),
    e("694", "SL", "Sierra Leone", Some(AF)),
    e("702", "SG", "Singapore", Some(AS)),
    e("703", "SK", "Slovakia", Some(EU)),
    e("704", "VN", "Vietnam", Some(AS)),
    e("705", "SI", "Slovenia", Some(EU)),
    e("706", "SO", "Somalia", Some(AF)),
    e("710", "ZA", "South Africa", Some(AF)),
    e("716", "ZW", "Zimbabwe", Some(AF)),
    e("724", "ES", "Spain", Some(EU)),
    e("728", "SS", "South Sudan", Some(AF)),
    e("729", "SD", "Sudan", Some(AF)),
    e("732", "EH", "Western Sahara", None),
    e("740", "SR", "Suriname", Some(SA)),
    e("744", "SJ", "Svalbard and Jan Mayen", None),
    e("748", "SZ", "Eswatini", None),
    e("752", "SE", "Sweden", Some(EU)),
    e("756", "CH", "Switzerland", Some(EU)),
    e("760", "SY", "Syria", Some(ME)),
    e("762", "TJ", "Tajikistan", Some(AS)),
    e("764", "TH", "Thailand", Some(AS)),
    e("768", "TG", "Togo", Some(AF)),
    e("772", "TK", "Tokelau", Some(OC)),
    e("776", "TO", "Tonga", Some(OC)),
    e("780", "TT", "Trinidad and Tobago", Some(NA)),
    e("784", "AE", "United Arab Emirates", Some(ME)),
    e("788", "TN", "Tunisia", Some(ME)),
    e("792", "TR", "Turkey", Some(EU)),
    e("795", "TM", "Turkmenistan", Some(AS)),
    e("796", "TC", "Turks and Caicos Islands", None),
    e("798", "TV", "Tuvalu", Some(OC)),
    e("800", "UG", "Uganda", Some(AF)),
    e("804", "UA", "Ukraine", Some(EU)),
    e("807", "MK", "North Macedonia", Some(EU)),
    e("818", "EG", "Egypt", Some(ME)),
    e("826", "GB", "United Kingdom", Some(EU)),
    e("834", "TZ", "Tanzania", Some(AF)),
    e("840", "US", "United States", Some(NA)),
    e("850", "VI", "US Virgin Islands", None),
    e("854", "BF", "Burkina Faso", Some(AF)),
    e("858", "UY", "Uruguay", Some(SA)),
    e("860", "UZ", "Uzbekistan", Some(AS)),
    e("862", "VE", "Venezuela", Some(SA)),
    e("876", "WF", "Wallis and Futuna", Some(OC)),
    e("882", "WS", "Samoa", Some(OC)),
    e("887", "YE", "Yemen", Some(ME)),
    e("894", "ZM", "Zambia", Some(AF)),
    // Kosovo: user-assigned alpha-2, no ISO numeric code.
    RegistryEntry {
        numeric: None,
        alpha2: "XK",
        name: "Kosovo",
        region: Some(EU),
    },
];

/// Alternate and abbreviated names, mapped to the alpha-2 code of a
/// registry entry. The abbreviated forms are the ones the world-atlas
/// geometry source actually ships.
pub static ALT_NAMES: &[(&str, &str)] = &[
    ("United States of America", "US"),
    ("USA", "US"),
    ("Great Britain", "GB"),
    ("Britain", "GB"),
    ("UK", "GB"),
    ("Republic of Korea", "KR"),
    ("Korea", "KR"),
    ("Democratic People's Republic of Korea", "KP"),
    ("DPRK", "KP"),
    ("UAE", "AE"),
    ("East Timor", "TL"),
    ("Democratic Republic of Congo", "CD"),
    ("W. Sahara", "EH"),
    ("Dem. Rep. Congo", "CD"),
    ("Dominican Rep.", "DO"),
    ("Central African Rep.", "CF"),
    ("Eq. Guinea", "GQ"),
    ("N. Cyprus", "CY"),
    ("Northern Cyprus", "CY"),
    ("Somaliland", "SO"),
    ("Falkland Is.", "FK"),
    ("Solomon Is.", "SB"),
    ("Fr. S. Antarctic Lands", "TF"),
    ("S. Sudan", "SS"),
    ("Bosnia and Herz.", "BA"),
];

static BY_NUMERIC: LazyLock<HashMap<&'static str, &'static RegistryEntry>> =
    LazyLock::new(|| {
        ENTRIES
            .iter()
            .filter_map(|entry| entry.numeric.map(|numeric| (numeric, entry)))
            .collect()
    });

static BY_ALPHA2: LazyLock<HashMap<&'static str, &'static RegistryEntry>> =
    LazyLock::new(|| ENTRIES.iter().map(|entry| (entry.alpha2, entry)).collect());

static NAME_TO_ALPHA2: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, &'static str> = ENTRIES
        .iter()
        .map(|entry| (entry.name, entry.alpha2))
        .collect();
    map.extend(ALT_NAMES.iter().copied());
    map
});

static LOWER_NAME_TO_ALPHA2: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    NAME_TO_ALPHA2
        .iter()
        .map(|(name, alpha2)| (name.to_lowercase(), *alpha2))
        .collect()
});

pub fn entries() -> &'static [RegistryEntry] {
    ENTRIES
}

/// Exact lookup by numeric code.
pub fn by_numeric(code: &str) -> Option<&'static RegistryEntry> {
    BY_NUMERIC.get(code).copied()
}

/// Exact lookup by alpha-2 code. Stored keys are uppercase; callers
/// normalize case before querying.
pub fn by_alpha2(code: &str) -> Option<&'static RegistryEntry> {
    BY_ALPHA2.get(code).copied()
}

/// Exact name lookup over canonical and alternate names.
pub fn name_to_alpha2(name: &str) -> Option<&'static str> {
    NAME_TO_ALPHA2.get(name).copied()
}

/// Case-insensitive name lookup. Expects an already-lowercased key.
pub fn lower_name_to_alpha2(name: &str) -> Option<&'static str> {
    LOWER_NAME_TO_ALPHA2.get(name).copied()
}

/// Numeric code for a country name, joined through the alpha-2 table.
pub fn name_to_numeric(name: &str) -> Option<&'static str> {
    name_to_alpha2(name)
        .and_then(by_alpha2)
        .and_then(|entry| entry.numeric)
}

/// Canonical display name for an alpha-2 code.
pub fn canonical_name(alpha2: &str) -> Option<&'static str> {
    by_alpha2(alpha2).map(|entry| entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_round_trip_for_every_numeric_entry() {
        // The numeric<->alpha2 mapping round-trips for every entry that
        // has a numeric code. The map is not bijective: Kosovo has an
        // alpha-2 code but no numeric counterpart, so it is exempt.
        for entry in entries() {
            match entry.numeric {
                Some(numeric) => {
                    let via_numeric = by_numeric(numeric).expect("numeric key present");
                    assert_eq!(via_numeric.alpha2, entry.alpha2);
                    let via_alpha2 = by_alpha2(entry.alpha2).expect("alpha2 key present");
                    assert_eq!(via_alpha2.numeric, Some(numeric));
                }
                None => assert_eq!(entry.alpha2, "XK"),
            }
        }
    }

    #[test]
    fn alpha2_codes_are_unique_and_uppercase() {
        let mut seen = std::collections::HashSet::new();
        for entry in entries() {
            assert!(seen.insert(entry.alpha2), "duplicate alpha2 {}", entry.alpha2);
            assert_eq!(entry.alpha2, entry.alpha2.to_uppercase());
            assert_eq!(entry.alpha2.len(), 2);
        }
    }

    #[test]
    fn numeric_codes_are_unique_three_digit() {
        let mut seen = std::collections::HashSet::new();
        for entry in entries() {
            if let Some(numeric) = entry.numeric {
                assert!(seen.insert(numeric), "duplicate numeric {numeric}");
                assert_eq!(numeric.len(), 3);
                assert!(numeric.bytes().all(|b| b.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn alt_names_target_registered_codes() {
        for (name, alpha2) in ALT_NAMES {
            assert!(
                by_alpha2(alpha2).is_some(),
                "alternate name {name:?} maps to unregistered code {alpha2}"
            );
        }
    }

    #[test]
    fn name_lookups() {
        assert_eq!(name_to_alpha2("Germany"), Some("DE"));
        assert_eq!(name_to_alpha2("USA"), Some("US"));
        assert_eq!(name_to_alpha2("W. Sahara"), Some("EH"));
        assert_eq!(name_to_alpha2("germany"), None); // exact pass is case-sensitive
        assert_eq!(lower_name_to_alpha2("germany"), Some("DE"));
        assert_eq!(name_to_numeric("United States"), Some("840"));
        assert_eq!(name_to_numeric("Kosovo"), None);
        assert_eq!(canonical_name("CD"), Some("Democratic Republic of the Congo"));
    }

    #[test]
    fn special_entries() {
        let kosovo = by_alpha2("XK").unwrap();
        assert_eq!(kosovo.numeric, None);
        let antarctica = by_numeric("010").unwrap();
        assert_eq!(antarctica.alpha2, "AQ");
        assert_eq!(antarctica.region, Some(Region::Antarctica));
    }
}
