//! Static jurisdiction table: which Apple legal entity is accountable for
//! sales made in which country.
//!
//! The data is taken from Schedule 2, Exhibit A of Apple's "iOS / macOS
//! Paid Applications" contract as effective of August, 2023. It is kept in
//! sync with the contract by hand and deliberately not derived from the
//! input files.

/// VAT ID of Apple's EU subsidiary.
pub const VAT_ID_EUROPE: &str = "IE9700053D";

/// Apple legal entity of record for sales in a set of countries.
#[derive(Debug, PartialEq, Eq)]
pub struct Subsidiary {
    /// Short handle used in the per-subsidiary total line ("EU Total:").
    pub code: &'static str,
    pub name: &'static str,
    pub address_lines: &'static [&'static str],
    pub vat_id: Option<&'static str>,
    pub is_eu_member: bool,
}

static AUSTRALIA: Subsidiary = Subsidiary {
    code: "AU",
    name: "Apple Pty Limited",
    address_lines: &[
        "Level 3",
        "20 Martin Place",
        "Sydney South 2000",
        "Australia",
    ],
    vat_id: None,
    is_eu_member: false,
};

static CANADA: Subsidiary = Subsidiary {
    code: "CA",
    name: "Apple Canada Inc.",
    address_lines: &[
        "120 Bremner Boulevard, Suite 1600",
        "Toronto, ON M5J 0A8",
        "Canada",
    ],
    vat_id: None,
    is_eu_member: false,
};

static EUROPE: Subsidiary = Subsidiary {
    code: "EU",
    name: "Apple Distribution International",
    address_lines: &[
        "Internet Software & Services",
        "Hollyhill Industrial Estate",
        "Hollyhill, Cork",
        "Republic of Ireland",
    ],
    vat_id: Some(VAT_ID_EUROPE),
    is_eu_member: true,
};

static JAPAN: Subsidiary = Subsidiary {
    code: "JP",
    name: "iTunes K.K.",
    address_lines: &[
        "〒 106-6140",
        "6-10-1 Roppongi, Minato-ku, Tokyo",
        "Japan",
    ],
    vat_id: None,
    is_eu_member: false,
};

static LATAM: Subsidiary = Subsidiary {
    code: "LL",
    name: "Apple Services LATAM LLC",
    address_lines: &[
        "1 Alhambra Plaza",
        "Suite 700",
        "Coral Gables, FL 33134",
        "U.S.A.",
    ],
    vat_id: None,
    is_eu_member: false,
};

static UNITED_STATES: Subsidiary = Subsidiary {
    code: "US",
    name: "Apple Inc.",
    address_lines: &["1 Apple Park Way", "Cupertino, CA 95014", "U.S.A."],
    vat_id: None,
    is_eu_member: false,
};

/// Country code, country name and the subsidiary handling the country's
/// sales, in contract-schedule order.
static JURISDICTIONS: &[(&str, &str, &Subsidiary)] = &[
    ("AU", "Australia", &AUSTRALIA),
    ("NZ", "New Zealand", &AUSTRALIA),
    ("CA", "Canada", &CANADA),
    ("AF", "Afghanistan", &EUROPE),
    ("AL", "Albania", &EUROPE),
    ("DZ", "Algeria", &EUROPE),
    ("AO", "Angola", &EUROPE),
    ("AM", "Armenia", &EUROPE),
    ("AT", "Austria", &EUROPE),
    ("AZ", "Azerbaijan", &EUROPE),
    ("BH", "Bahrain", &EUROPE),
    ("BY", "Belarus", &EUROPE),
    ("BE", "Belgium", &EUROPE),
    ("BJ", "Benin", &EUROPE),
    ("BT", "Bhutan", &EUROPE),
    ("BA", "Bosnia and Herzegovina", &EUROPE),
    ("BW", "Botswana", &EUROPE),
    ("BN", "Brunei", &EUROPE),
    ("BG", "Bulgaria", &EUROPE),
    ("BF", "Burkina-Faso", &EUROPE),
    ("KH", "Cambodia", &EUROPE),
    ("CM", "Cameroon", &EUROPE),
    ("CV", "Cape Verde", &EUROPE),
    ("TD", "Chad", &EUROPE),
    ("CN", "China", &EUROPE),
    ("CD", "Democratic Republic of Congo", &EUROPE),
    ("CG", "Republic of Congo", &EUROPE),
    ("CI", "Cote d’Ivoire", &EUROPE),
    ("HR", "Croatia", &EUROPE),
    ("CY", "Cyprus", &EUROPE),
    ("CZ", "Czech Republic", &EUROPE),
    ("DK", "Denmark", &EUROPE),
    ("EG", "Egypt", &EUROPE),
    ("EE", "Estonia", &EUROPE),
    ("FJ", "Fiji", &EUROPE),
    ("FI", "Finland", &EUROPE),
    ("FR", "France", &EUROPE),
    ("GA", "Gabon", &EUROPE),
    ("GM", "Gambia", &EUROPE),
    ("GE", "Georgia", &EUROPE),
    ("DE", "Germany", &EUROPE),
    ("GH", "Ghana", &EUROPE),
    ("GR", "Greece", &EUROPE),
    ("GW", "Guinea-Bissau", &EUROPE),
    ("HK", "Hong Kong", &EUROPE),
    ("HU", "Hungary", &EUROPE),
    ("IS", "Iceland", &EUROPE),
    ("IN", "India", &EUROPE),
    ("ID", "Indonesia", &EUROPE),
    ("IQ", "Iraq", &EUROPE),
    ("IE", "Ireland", &EUROPE),
    ("IL", "Israel", &EUROPE),
    ("IT", "Italy", &EUROPE),
    ("JO", "Jordan", &EUROPE),
    ("KZ", "Kazakhstan", &EUROPE),
    ("KE", "Kenya", &EUROPE),
    ("KR", "Korea", &EUROPE),
    ("XK", "Kosovo", &EUROPE),
    ("KW", "Kuwait", &EUROPE),
    ("KG", "Kyrgyzstan", &EUROPE),
    ("LA", "Laos", &EUROPE),
    ("LV", "Latvia", &EUROPE),
    ("LB", "Lebanon", &EUROPE),
    ("LR", "Liberia", &EUROPE),
    ("LY", "Libya", &EUROPE),
    ("LT", "Lithuania", &EUROPE),
    ("LU", "Luxembourg", &EUROPE),
    ("MO", "Macao", &EUROPE),
    ("MK", "Macedonia", &EUROPE),
    ("MG", "Madagascar", &EUROPE),
    ("MW", "Malawi", &EUROPE),
    ("MY", "Malaysia", &EUROPE),
    ("MV", "Maldives", &EUROPE),
    ("ML", "Mali", &EUROPE),
    ("MT", "Republic of Malta", &EUROPE),
    ("MR", "Mauritania", &EUROPE),
    ("MU", "Mauritius", &EUROPE),
    ("FM", "Federal States of Micronesia", &EUROPE),
    ("MD", "Moldova", &EUROPE),
    ("MN", "Mongolia", &EUROPE),
    ("ME", "Montenegro", &EUROPE),
    ("MA", "Morocco", &EUROPE),
    ("MZ", "Mozambique", &EUROPE),
    ("MM", "Myanmar", &EUROPE),
    ("NA", "Namibia", &EUROPE),
    ("NR", "Nauru", &EUROPE),
    ("NP", "Nepal", &EUROPE),
    ("NL", "Netherlands", &EUROPE),
    ("NE", "Niger", &EUROPE),
    ("NG", "Nigeria", &EUROPE),
    ("NO", "Norway", &EUROPE),
    ("OM", "Oman", &EUROPE),
    ("PK", "Pakistan", &EUROPE),
    ("PW", "Palau", &EUROPE),
    ("PG", "Papua New Guinea", &EUROPE),
    ("PH", "Philippines", &EUROPE),
    ("PL", "Poland", &EUROPE),
    ("PT", "Portugal", &EUROPE),
    ("QA", "Qatar", &EUROPE),
    ("RO", "Romania", &EUROPE),
    ("RU", "Russia", &EUROPE),
    ("RW", "Rwanda", &EUROPE),
    ("ST", "Sao Tome e Principe", &EUROPE),
    ("SA", "Saudi Arabia", &EUROPE),
    ("SN", "Senegal", &EUROPE),
    ("RS", "Serbia", &EUROPE),
    ("SC", "Seychelles", &EUROPE),
    ("SL", "Sierra Leone", &EUROPE),
    ("SG", "Singapore", &EUROPE),
    ("SK", "Slovakia", &EUROPE),
    ("SI", "Slovenia", &EUROPE),
    ("SB", "Solomon Islands", &EUROPE),
    ("ZA", "South Africa", &EUROPE),
    ("ES", "Spain", &EUROPE),
    ("LK", "Sri Lanka", &EUROPE),
    ("SZ", "Swaziland", &EUROPE),
    ("SE", "Sweden", &EUROPE),
    ("CH", "Switzerland", &EUROPE),
    ("TW", "Taiwan", &EUROPE),
    ("TJ", "Tajikistan", &EUROPE),
    ("TZ", "Tanzania", &EUROPE),
    ("TH", "Thailand", &EUROPE),
    ("TO", "Tonga", &EUROPE),
    ("TN", "Tunisia", &EUROPE),
    ("TR", "Türkiye", &EUROPE),
    ("TM", "Turkmenistan", &EUROPE),
    ("AE", "United Arab Emirates", &EUROPE),
    ("UG", "Uganda", &EUROPE),
    ("UA", "Ukraine", &EUROPE),
    ("GB", "United Kingdom", &EUROPE),
    ("UZ", "Uzbekistan", &EUROPE),
    ("VU", "Vanuatu", &EUROPE),
    ("VN", "Vietnam", &EUROPE),
    ("YE", "Yemen", &EUROPE),
    ("ZM", "Zambia", &EUROPE),
    ("ZW", "Zimbabwe", &EUROPE),
    ("JP", "Japan", &JAPAN),
    ("AI", "Anguilla", &LATAM),
    ("AG", "Antigua & Barbuda", &LATAM),
    ("AR", "Argentinia", &LATAM),
    ("BS", "Bahamas", &LATAM),
    ("BB", "Barbados", &LATAM),
    ("BZ", "Belize", &LATAM),
    ("BM", "Bermuda", &LATAM),
    ("BO", "Bolivia", &LATAM),
    ("BR", "Brazil", &LATAM),
    ("VG", "British Virgin Islands", &LATAM),
    ("KY", "Cayman Islands", &LATAM),
    ("CL", "Chile", &LATAM),
    ("CO", "Colombia", &LATAM),
    ("CR", "Costa Rica", &LATAM),
    ("DM", "Dominica", &LATAM),
    ("DO", "Dominican Republic", &LATAM),
    ("EC", "Ecuador", &LATAM),
    ("SV", "El Salvador", &LATAM),
    ("GD", "Grenada", &LATAM),
    ("GY", "Guyana", &LATAM),
    ("GT", "Guatemala", &LATAM),
    ("HN", "Honduras", &LATAM),
    ("JM", "Jamaica", &LATAM),
    ("MX", "Mexico", &LATAM),
    ("MS", "Montserrat", &LATAM),
    ("NI", "Nicaragua", &LATAM),
    ("PA", "Panama", &LATAM),
    ("PY", "Paraguay", &LATAM),
    ("PE", "Peru", &LATAM),
    ("KN", "St. Kitts & Nevis", &LATAM),
    ("LC", "St. Lucia", &LATAM),
    ("VC", "St. Vincent & The Grenadines", &LATAM),
    ("SR", "Suriname", &LATAM),
    ("TT", "Trinidad & Tobago", &LATAM),
    ("TC", "Turks & Caicos", &LATAM),
    ("UY", "Uruguay", &LATAM),
    ("VE", "Venezuela", &LATAM),
    ("US", "United States", &UNITED_STATES),
];

/// Get the Apple subsidiary handling sales of the given country.
pub fn subsidiary_for(country_code: &str) -> Option<&'static Subsidiary> {
    JURISDICTIONS
        .iter()
        .find(|(code, _, _)| *code == country_code)
        .map(|(_, _, subsidiary)| *subsidiary)
}

/// Get the name of the country with the given country code.
pub fn country_name(country_code: &str) -> Option<&'static str> {
    JURISDICTIONS
        .iter()
        .find(|(code, _, _)| *code == country_code)
        .map(|(_, name, _)| *name)
}
