//! Built-in labeling functions for Dutch regional news.
//!
//! Rules voting on whether an article concerns a small/medium
//! enterprise. Positive rules fire on company, sector, and
//! entrepreneurship vocabulary; negative rules fire on topics that crowd
//! out SME relevance (politics, government appointments, accidents,
//! sports). Sector vocabulary follows the CBS standard industry
//! groupings. Individual rule accuracy is unknown by design — the label
//! model estimates it from agreement statistics.

use super::rules::{CooccurrenceRule, KeywordRule, PatternRule};
use super::set::LabelingFunctionSet;
use super::types::Vote;

/// The full built-in set, in a fixed registration order.
pub fn dutch_news_set() -> LabelingFunctionSet {
    let mut set = LabelingFunctionSet::new();

    set.push(Box::new(KeywordRule::new(
        "explicit_sme",
        &[
            "mkb",
            "midden- en kleinbedrijf",
            "kmo",
            "kleine onderneming",
            "kleine bedrijven",
            "small and medium enterprise",
            "mkb-ondernemer",
            "mkb-ondernemers",
            "mkb-bedrijf",
            "mkb-bedrijven",
            "mkb-sector",
            "ondernemersvereniging",
            "ondernemersloket",
        ],
        Vote::Positive,
    )));

    // The "mkb'er(s)" spelling carries an apostrophe inside the word, so
    // it stays a regex instead of a vocabulary entry.
    set.push(Box::new(
        PatternRule::new("explicit_sme_apostrophe", r"\bmkb'ers?\b", Vote::Positive)
            .expect("static rule pattern"),
    ));

    set.push(Box::new(KeywordRule::new(
        "company_mentions",
        &[
            "bedrijf",
            "bedrijven",
            "onderneming",
            "ondernemingen",
            "zaak",
            "zaken",
            "ondernemingshuis",
            "bedrijfsleven",
            "bedrijfstak",
            "bedrijfssector",
        ],
        Vote::Positive,
    )));

    set.push(Box::new(KeywordRule::new(
        "sector_terms",
        &[
            // Agriculture
            "landbouw",
            "akkerbouw",
            "tuinbouw",
            "bosbouw",
            "visserij",
            "kwekerij",
            "veeteelt",
            "pluimvee",
            // Mining
            "delfstoffenwinning",
            "mijnbouw",
            "groeve",
            // Industry / energy / water / waste
            "industrie",
            "fabriek",
            "fabrieken",
            "productiebedrijf",
            "energievoorziening",
            "energiebedrijf",
            "waterbedrijf",
            "watermaatschappij",
            "afvalbeheer",
            "recycling",
            "milieudienst",
            // Construction
            "bouwnijverheid",
            "bouwbedrijf",
            "aannemer",
            "aannemers",
            "installatiebedrijf",
            "bouwsector",
            "bouwvakker",
            // Trade / retail
            "handel",
            "detailhandel",
            "groothandel",
            "winkel",
            "supermarkt",
            "bakker",
            "bakkerij",
            "slager",
            "slagerij",
            "kapsalon",
            "drogisterij",
            "webwinkel",
            "e-commerce",
            // Transport / storage
            "vervoer",
            "transportbedrijf",
            "logistiek",
            "opslag",
            "magazijn",
            "koerier",
            "koeriers",
            "distributiecentrum",
            // Hospitality
            "horeca",
            "restaurant",
            "café",
            "hotel",
            "snackbar",
            "catering",
            // Information & communication, incl. security services
            "softwarebedrijf",
            "telecom",
            "mediabedrijf",
            "uitgeverij",
            "communicatiebureau",
            "cyberbedrijf",
            "cybersecurity",
            "cyberweerbaarheid",
            "informatiebeveiliging",
            "beveiligingsbedrijf",
            // Financial
            "boekhoudkantoor",
            "accountantskantoor",
            "administratiekantoor",
            "verzekeringskantoor",
            // Real estate
            "makelaar",
            "vastgoed",
            "woningcorporatie",
            // Specialist business services
            "adviesbureau",
            "consultancy",
            "marketingbureau",
            "ingenieursbureau",
            "advocatenkantoor",
            // Rental & other business services
            "uitzendbureau",
            "detacheringsbureau",
            "schoonmaakbedrijf",
            // Education / health / culture
            "kinderopvang",
            "opleidingsinstituut",
            "praktijk",
            "kliniek",
            "fysiotherapie",
            "zorginstelling",
            "sportschool",
            "fitnesscentrum",
            "recreatiebedrijf",
        ],
        Vote::Positive,
    )));

    set.push(Box::new(KeywordRule::new(
        "entrepreneurship",
        &[
            "ondernemer",
            "ondernemers",
            "zelfstandige",
            "zelfstandigen",
            "zzp",
            "start-up",
            "startup",
            "startups",
            "ondernemerschap",
            "freelancer",
            "freelancers",
        ],
        Vote::Positive,
    )));

    set.push(Box::new(KeywordRule::new(
        "international_politics",
        &[
            "starmer",
            "trump",
            "europa",
            "oorlog",
            "russische aanval",
            "nato",
            "navo",
            "united states",
            "verenigde staten",
        ],
        Vote::Negative,
    )));

    set.push(Box::new(KeywordRule::new(
        "domestic_politics",
        &[
            "politiek",
            "partij",
            "stemmen",
            "verkiezing",
            "verkiezingen",
            "minister",
            "parlement",
            "partijleider",
            "gemeenteraad",
            "beleid",
        ],
        Vote::Negative,
    )));

    set.push(Box::new(KeywordRule::new(
        "government_appointments",
        &[
            "ministerie",
            "departement",
            "justitie",
            "algemene bestuursdienst",
            "benoemd",
            "benoeming",
            "aanstelling",
            "vacature",
            "bestuurder",
            "leidinggevende",
            "plaatsvervangend",
        ],
        Vote::Negative,
    )));

    set.push(Box::new(KeywordRule::new(
        "accidents_crime",
        &[
            "ongeluk",
            "drama",
            "ramp",
            "brand",
            "dood",
            "moord",
            "criminaliteit",
            "aanrijding",
            "botsing",
            "explosie",
            "rellen",
        ],
        Vote::Negative,
    )));

    set.push(Box::new(CooccurrenceRule::new(
        "sme_cybercrime",
        &["mkb", "bedrijf", "ondernemer", "zaak", "organisatie"],
        &[
            "cyber",
            "digitale",
            "phishing",
            "ransomware",
            "weerbaarheid",
            "cybercrime",
            "hack",
        ],
        Vote::Positive,
    )));

    set.push(Box::new(KeywordRule::new(
        "sports_entertainment",
        &[
            "voetbal",
            "honkbal",
            "sport",
            "theater",
            "film",
            "serie",
            "muziek",
            "concert",
            "festival",
            "wedstrijd",
            "wedstrijden",
        ],
        Vote::Negative,
    )));

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::types::Vote;

    #[test]
    fn set_has_fixed_order_and_size() {
        let set = dutch_news_set();
        assert_eq!(set.len(), 11);
        let names = set.names();
        assert_eq!(names[0], "explicit_sme");
        assert_eq!(names[10], "sports_entertainment");
    }

    #[test]
    fn sme_article_draws_positive_votes() {
        let set = dutch_news_set();
        let row = set.label_row(
            "De bakkerij in Maastricht is een kleine onderneming die uitbreidt",
        );
        assert!(row.contains(&Vote::Positive));
        assert!(!row.contains(&Vote::Negative));
    }

    #[test]
    fn politics_article_draws_negative_votes() {
        let set = dutch_news_set();
        let row = set.label_row("De minister kondigt nieuw beleid aan na de verkiezingen");
        assert!(row.contains(&Vote::Negative));
    }

    #[test]
    fn cybercrime_rule_needs_company_context() {
        let set = dutch_news_set();
        let names = set.names();
        let idx = names.iter().position(|n| n == "sme_cybercrime").unwrap();

        let with_context =
            set.label_row("mkb getroffen door ransomware, schade loopt op");
        assert_eq!(with_context[idx], Vote::Positive);

        let without_context = set.label_row("ransomware aanval op onbekend doelwit");
        assert_eq!(without_context[idx], Vote::Abstain);
    }

    #[test]
    fn unrelated_text_abstains_everywhere() {
        let set = dutch_news_set();
        let row = set.label_row("zonnig weer verwacht in het zuiden");
        assert!(row.iter().all(|v| v.is_abstain()));
    }
}
