//! Drug name alias expansion.
//!
//! Users type whatever name they know — international ("paracetamol"),
//! generic ("acetaminophen"), or brand ("tylenol"). The alias table turns a
//! single query into an ordered candidate list covering all of them, which
//! the remote lookup then tries in order.

use std::collections::HashSet;

use crate::text::normalize_query;

/// One table entry: canonical key plus its alternate names, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// Canonical drug key, lowercase.
    pub key: String,
    /// Alternate names (brand, generic), lowercase, ordered.
    pub aliases: Vec<String>,
}

/// Many-to-many name mapping table, read-only after construction.
///
/// Keys may share aliases, and expansion searches alias values as well as
/// keys, since a query may be either side of the mapping.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

/// Common name mappings (international names to US names).
const BUILTIN: &[(&str, &[&str])] = &[
    ("paracetamol", &["acetaminophen", "tylenol"]),
    ("panadol", &["acetaminophen", "tylenol"]),
    ("acetaminophen", &["tylenol", "acetaminophen"]),
    ("ibuprofen", &["advil", "motrin", "ibuprofen"]),
    ("aspirin", &["aspirin", "bayer"]),
    ("diclofenac", &["voltaren", "diclofenac"]),
    ("omeprazole", &["prilosec", "omeprazole"]),
    ("metformin", &["glucophage", "metformin"]),
    ("amoxicillin", &["amoxil", "amoxicillin"]),
    ("azithromycin", &["zithromax", "z-pak", "azithromycin"]),
    ("lisinopril", &["zestril", "prinivil", "lisinopril"]),
    ("atorvastatin", &["lipitor", "atorvastatin"]),
    ("simvastatin", &["zocor", "simvastatin"]),
    ("metoprolol", &["lopressor", "metoprolol"]),
    ("amlodipine", &["norvasc", "amlodipine"]),
    ("losartan", &["cozaar", "losartan"]),
    ("gabapentin", &["neurontin", "gabapentin"]),
    ("sertraline", &["zoloft", "sertraline"]),
    ("fluoxetine", &["prozac", "fluoxetine"]),
    ("escitalopram", &["lexapro", "escitalopram"]),
    ("cetirizine", &["zyrtec", "cetirizine"]),
    ("loratadine", &["claritin", "loratadine"]),
    ("diphenhydramine", &["benadryl", "diphenhydramine"]),
    ("ranitidine", &["zantac", "ranitidine"]),
    ("pantoprazole", &["protonix", "pantoprazole"]),
    ("prednisone", &["deltasone", "prednisone"]),
    ("albuterol", &["ventolin", "proair", "albuterol"]),
    ("montelukast", &["singulair", "montelukast"]),
    ("levothyroxine", &["synthroid", "levothyroxine"]),
    ("warfarin", &["coumadin", "warfarin"]),
    ("clopidogrel", &["plavix", "clopidogrel"]),
    ("tramadol", &["ultram", "tramadol"]),
    ("naproxen", &["aleve", "naprosyn", "naproxen"]),
    ("hydrocodone", &["vicodin", "norco", "hydrocodone"]),
    ("oxycodone", &["oxycontin", "percocet", "oxycodone"]),
    ("cyclobenzaprine", &["flexeril", "cyclobenzaprine"]),
    ("meloxicam", &["mobic", "meloxicam"]),
    ("duloxetine", &["cymbalta", "duloxetine"]),
    ("venlafaxine", &["effexor", "venlafaxine"]),
    ("bupropion", &["wellbutrin", "bupropion"]),
    ("trazodone", &["desyrel", "trazodone"]),
    ("alprazolam", &["xanax", "alprazolam"]),
    ("lorazepam", &["ativan", "lorazepam"]),
    ("clonazepam", &["klonopin", "clonazepam"]),
    ("zolpidem", &["ambien", "zolpidem"]),
];

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    /// Table with the default name mappings.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(key, aliases)| AliasEntry {
                key: (*key).into(),
                aliases: aliases.iter().map(|a| (*a).into()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Table over a substitute entry list.
    pub fn with_entries(entries: Vec<AliasEntry>) -> Self {
        Self { entries }
    }

    /// Expand a query into an ordered, deduplicated candidate term list.
    ///
    /// The normalized query is always the first candidate. A key match
    /// appends that entry's aliases; independently, any entry listing the
    /// query among its aliases contributes its key and full alias list
    /// (reverse lookup). First-seen order is preserved.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let normalized = normalize_query(query);
        let mut terms = vec![normalized.clone()];

        if let Some(entry) = self.entries.iter().find(|e| e.key == normalized) {
            terms.extend(entry.aliases.iter().cloned());
        }

        for entry in &self.entries {
            if entry
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(&normalized))
            {
                terms.push(entry.key.clone());
                terms.extend(entry.aliases.iter().cloned());
            }
        }

        let mut seen = HashSet::new();
        terms.retain(|term| seen.insert(term.clone()));
        terms
    }
}
