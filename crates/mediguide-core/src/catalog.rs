//! Static medicine catalog.
//!
//! The fully offline resolution path: a fixed, hand-curated table of
//! common over-the-counter and prescription medicines. Constructed once at
//! startup and passed by reference; never mutated afterwards.

use std::future::{ready, Future};

use crate::models::{MedicineRecord, Resolution};
use crate::source::MedicineSource;
use crate::text::normalize_query;

/// One catalog entry: lowercase lookup key plus the full record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Lookup key, lowercase.
    pub key: String,
    /// The canonical record returned on a hit.
    pub record: MedicineRecord,
}

/// Immutable key → record table with substring fallback.
///
/// Matching is deliberately linear and unscored: exact key first, then the
/// first entry in table order whose key or display name contains the query.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StaticCatalog {
    /// Catalog with the default hand-curated records.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    /// Catalog over a substitute entry list.
    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Resolve a query against the table.
    ///
    /// Exact key match returns immediately; otherwise the first entry in
    /// table order whose key contains the normalized query as a substring,
    /// or whose display name (lowercased) does, wins. No scoring.
    pub fn resolve(&self, query: &str) -> Option<&MedicineRecord> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return None;
        }

        if let Some(entry) = self.entries.iter().find(|e| e.key == normalized) {
            return Some(&entry.record);
        }

        self.entries
            .iter()
            .find(|e| {
                e.key.contains(&normalized)
                    || e.record.name.to_lowercase().contains(&normalized)
            })
            .map(|e| &e.record)
    }

    /// Leading word of each record's display name, in table order.
    ///
    /// Used for "try one of these" suggestion copy.
    pub fn display_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|e| e.record.name.split_whitespace().next())
            .map(str::to_string)
            .collect()
    }
}

impl MedicineSource for StaticCatalog {
    fn lookup(&self, query: &str) -> impl Future<Output = Resolution> + Send {
        let resolution = match self.resolve(query) {
            Some(record) => Resolution::Found(record.clone()),
            None => Resolution::not_found(),
        };
        ready(resolution)
    }
}

fn entry(
    key: &str,
    name: &str,
    description: &str,
    how_to_use: &str,
    when_to_use: &str,
    side_effects: &str,
    warnings: &str,
) -> CatalogEntry {
    CatalogEntry {
        key: key.into(),
        record: MedicineRecord {
            name: name.into(),
            description: description.into(),
            how_to_use: how_to_use.into(),
            when_to_use: when_to_use.into(),
            side_effects: side_effects.into(),
            warnings: warnings.into(),
        },
    }
}

fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            "paracetamol",
            "Paracetamol (Acetaminophen)",
            "Paracetamol is a commonly used pain reliever and fever reducer. It belongs to the class of analgesics and antipyretics. It works by blocking the production of prostaglandins in the brain that cause pain and fever.",
            "Take 500-1000mg every 4-6 hours as needed. Do not exceed 4000mg in 24 hours. Take with or without food. Swallow tablets whole with water.",
            "Use for mild to moderate pain such as headaches, toothaches, muscle aches, and to reduce fever. Effective for cold and flu symptoms.",
            "Generally well-tolerated. Rare side effects include allergic reactions, skin rash, and liver problems with overdose.",
            "Do not exceed recommended dose. Avoid alcohol while taking this medication. Consult a doctor if you have liver disease. Not recommended for children under 2 years without medical advice.",
        ),
        entry(
            "ibuprofen",
            "Ibuprofen",
            "Ibuprofen is a nonsteroidal anti-inflammatory drug (NSAID) used to reduce fever and treat pain or inflammation. It works by reducing hormones that cause inflammation and pain in the body.",
            "Take 200-400mg every 4-6 hours as needed. Maximum 1200mg in 24 hours for OTC use. Take with food or milk to reduce stomach upset.",
            "Use for headaches, dental pain, menstrual cramps, muscle aches, arthritis, and to reduce fever. Effective for inflammatory conditions.",
            "May cause stomach upset, nausea, dizziness, or headache. Long-term use may increase risk of heart attack or stroke.",
            "Avoid if you have stomach ulcers, kidney disease, or heart problems. Not recommended during the last trimester of pregnancy. Consult doctor if taking blood thinners.",
        ),
        entry(
            "aspirin",
            "Aspirin (Acetylsalicylic Acid)",
            "Aspirin is an NSAID used to reduce pain, fever, and inflammation. At low doses, it's used to prevent blood clots. It works by inhibiting cyclooxygenase enzymes.",
            "For pain: 325-650mg every 4-6 hours. For heart protection: 75-100mg daily. Take with food to minimize stomach irritation.",
            "Use for headaches, muscle pain, arthritis, and fever. Low-dose aspirin is used for cardiovascular protection in high-risk patients.",
            "May cause stomach irritation, bleeding, tinnitus (ringing in ears), and allergic reactions in sensitive individuals.",
            "Do not give to children under 16 (risk of Reye's syndrome). Avoid if you have bleeding disorders or stomach ulcers. Stop taking before surgery.",
        ),
        entry(
            "amoxicillin",
            "Amoxicillin",
            "Amoxicillin is a penicillin-type antibiotic used to treat bacterial infections. It works by stopping the growth of bacteria. It does not work for viral infections.",
            "Typical dose: 250-500mg every 8 hours or 500-875mg every 12 hours. Complete the full course even if you feel better. Can be taken with or without food.",
            "Prescribed for ear infections, strep throat, urinary tract infections, skin infections, and certain respiratory infections.",
            "May cause diarrhea, nausea, vomiting, rash, and allergic reactions. Serious allergic reactions require immediate medical attention.",
            "Inform your doctor if you're allergic to penicillin. Complete the entire course to prevent antibiotic resistance. This is a prescription medication only.",
        ),
        entry(
            "omeprazole",
            "Omeprazole",
            "Omeprazole is a proton pump inhibitor (PPI) that reduces stomach acid production. It's used to treat acid reflux, heartburn, and stomach ulcers.",
            "Take 20-40mg once daily, preferably in the morning before breakfast. Swallow capsules whole, do not crush or chew. Take 30-60 minutes before eating.",
            "Use for gastroesophageal reflux disease (GERD), stomach ulcers, erosive esophagitis, and conditions that cause excess stomach acid.",
            "May cause headache, nausea, diarrhea, stomach pain, and vitamin B12 deficiency with long-term use.",
            "Long-term use may increase risk of bone fractures and certain infections. Consult doctor if symptoms persist beyond 14 days. May interact with other medications.",
        ),
        entry(
            "cetirizine",
            "Cetirizine (Zyrtec)",
            "Cetirizine is a second-generation antihistamine used to treat allergic symptoms. It works by blocking histamine, a substance your body makes during an allergic reaction.",
            "Take 10mg once daily. Can be taken with or without food. For children 6-12 years: 5-10mg daily. Available as tablets, chewables, and liquid.",
            "Use for seasonal allergies (hay fever), year-round allergies, hives (urticaria), and allergic skin reactions.",
            "May cause drowsiness, dry mouth, fatigue, and headache. Less sedating than first-generation antihistamines.",
            "Use caution when driving or operating machinery. Consult doctor if pregnant or breastfeeding. Adjust dose for kidney impairment.",
        ),
        entry(
            "metformin",
            "Metformin",
            "Metformin is an oral diabetes medication that helps control blood sugar levels. It works by decreasing glucose production in the liver and improving insulin sensitivity.",
            "Starting dose: 500mg twice daily with meals. Maximum: 2550mg daily in divided doses. Take with food to reduce stomach upset. Swallow whole, do not crush extended-release tablets.",
            "Prescribed for type 2 diabetes to control blood sugar. Often used as first-line treatment along with diet and exercise.",
            "May cause nausea, diarrhea, stomach upset, and metallic taste. Rarely causes lactic acidosis, a serious condition.",
            "This is a prescription medication. Stop before contrast dye procedures. Avoid excessive alcohol. Not recommended for severe kidney or liver disease.",
        ),
        entry(
            "loratadine",
            "Loratadine (Claritin)",
            "Loratadine is a non-drowsy antihistamine used to treat allergy symptoms. It blocks histamine receptors without crossing into the brain significantly.",
            "Take 10mg once daily. Can be taken with or without food. For children 2-5 years: 5mg daily. Available as tablets, liquid, and dissolvable tablets.",
            "Use for allergic rhinitis, seasonal allergies, chronic hives, and allergic skin conditions.",
            "Generally well-tolerated. May cause headache, dry mouth, fatigue, and rarely drowsiness.",
            "Safe for most adults and children over 2 years. Consult doctor if pregnant or breastfeeding. Adjust dose for liver impairment.",
        ),
    ]
}
