/// A market accepted by the `country_indeed` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    /// Comma-separated identifiers accepted for this market
    pub aliases: &'static str,
}

impl Country {
    const fn new(name: &'static str, aliases: &'static str) -> Self {
        Self { name, aliases }
    }

    pub fn alias_list(&self) -> impl Iterator<Item = &'static str> {
        self.aliases.split(',').map(str::trim)
    }
}

pub static COUNTRIES: &[Country] = &[
    Country::new("ARGENTINA", "argentina"),
    Country::new("AUSTRALIA", "australia"),
    Country::new("AUSTRIA", "austria"),
    Country::new("BAHRAIN", "bahrain"),
    Country::new("BANGLADESH", "bangladesh"),
    Country::new("BELGIUM", "belgium"),
    Country::new("BULGARIA", "bulgaria"),
    Country::new("BRAZIL", "brazil"),
    Country::new("CANADA", "canada"),
    Country::new("CHILE", "chile"),
    Country::new("CHINA", "china"),
    Country::new("COLOMBIA", "colombia"),
    Country::new("COSTARICA", "costa rica"),
    Country::new("CROATIA", "croatia"),
    Country::new("CYPRUS", "cyprus"),
    Country::new("CZECHREPUBLIC", "czech republic,czechia"),
    Country::new("DENMARK", "denmark"),
    Country::new("ECUADOR", "ecuador"),
    Country::new("EGYPT", "egypt"),
    Country::new("ESTONIA", "estonia"),
    Country::new("FINLAND", "finland"),
    Country::new("FRANCE", "france"),
    Country::new("GERMANY", "germany"),
    Country::new("GREECE", "greece"),
    Country::new("HONGKONG", "hong kong"),
    Country::new("HUNGARY", "hungary"),
    Country::new("INDIA", "india"),
    Country::new("INDONESIA", "indonesia"),
    Country::new("IRELAND", "ireland"),
    Country::new("ISRAEL", "israel"),
    Country::new("ITALY", "italy"),
    Country::new("JAPAN", "japan"),
    Country::new("KUWAIT", "kuwait"),
    Country::new("LATVIA", "latvia"),
    Country::new("LITHUANIA", "lithuania"),
    Country::new("LUXEMBOURG", "luxembourg"),
    Country::new("MALAYSIA", "malaysia"),
    Country::new("MALTA", "malta"),
    Country::new("MEXICO", "mexico"),
    Country::new("MOROCCO", "morocco"),
    Country::new("NETHERLANDS", "netherlands"),
    Country::new("NEWZEALAND", "new zealand"),
    Country::new("NIGERIA", "nigeria"),
    Country::new("NORWAY", "norway"),
    Country::new("OMAN", "oman"),
    Country::new("PAKISTAN", "pakistan"),
    Country::new("PANAMA", "panama"),
    Country::new("PERU", "peru"),
    Country::new("PHILIPPINES", "philippines"),
    Country::new("POLAND", "poland"),
    Country::new("PORTUGAL", "portugal"),
    Country::new("QATAR", "qatar"),
    Country::new("ROMANIA", "romania"),
    Country::new("SAUDIARABIA", "saudi arabia"),
    Country::new("SINGAPORE", "singapore"),
    Country::new("SLOVAKIA", "slovakia"),
    Country::new("SLOVENIA", "slovenia"),
    Country::new("SOUTHAFRICA", "south africa"),
    Country::new("SOUTHKOREA", "south korea"),
    Country::new("SPAIN", "spain"),
    Country::new("SWEDEN", "sweden"),
    Country::new("SWITZERLAND", "switzerland"),
    Country::new("TAIWAN", "taiwan"),
    Country::new("THAILAND", "thailand"),
    Country::new("TURKEY", "türkiye,turkey"),
    Country::new("UKRAINE", "ukraine"),
    Country::new("UNITEDARABEMIRATES", "united arab emirates"),
    Country::new("UK", "uk,united kingdom"),
    Country::new("USA", "usa,us,united states"),
    Country::new("URUGUAY", "uruguay"),
    Country::new("VENEZUELA", "venezuela"),
    Country::new("VIETNAM", "vietnam"),
    Country::new("US_CANADA", "usa/ca"),
    Country::new("WORLDWIDE", "worldwide"),
];

/// Find a country by any of its aliases, ignoring case and surrounding whitespace
pub fn lookup(alias: &str) -> Option<&'static Country> {
    let wanted = alias.trim().to_lowercase();
    COUNTRIES
        .iter()
        .find(|country| country.alias_list().any(|a| a == wanted))
}

pub fn supported_countries() -> String {
    let mut lines = vec!["Supported Countries for Job Searches".to_string(), String::new()];

    lines.extend(
        COUNTRIES
            .iter()
            .map(|country| format!("- {}: {}", country.name, country.aliases)),
    );

    lines.extend(
        [
            "",
            "Note: Use one of the identifiers above for the 'country_indeed' parameter.",
            "",
            "Popular Options:",
            "- usa, us, united states",
            "- uk, united kingdom",
            "- canada",
            "- australia",
            "- germany",
            "- france",
            "- india",
            "- singapore",
        ]
        .map(String::from),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_any_alias() {
        assert_eq!(lookup("usa").map(|c| c.name), Some("USA"));
        assert_eq!(lookup("United States").map(|c| c.name), Some("USA"));
        assert_eq!(lookup(" uk ").map(|c| c.name), Some("UK"));
        assert_eq!(lookup("czechia").map(|c| c.name), Some("CZECHREPUBLIC"));
        assert!(lookup("atlantis").is_none());
    }

    #[test]
    fn listing_has_one_line_per_country() {
        let text = supported_countries();

        assert!(text.starts_with("Supported Countries for Job Searches\n\n"));
        assert!(text.contains("- USA: usa,us,united states"));
        assert_eq!(
            text.lines().filter(|l| l.starts_with("- ") && l.contains(": ")).count(),
            COUNTRIES.len()
        );
    }
}
