//! Shaping raw label records into canonical medicine records.
//!
//! Each field derives independently through a first-applicable-source
//! chain, ending in boilerplate copy, so normalization never fails and
//! never produces an empty field.

use mediguide_core::text::extract_first_paragraph;
use mediguide_core::MedicineRecord;

use crate::label::{first_block, LabelResult};

/// Character budget for the description field.
const DESCRIPTION_MAX: usize = 300;

/// Character budget for the usage, indication, reaction, and warning fields.
const SECTION_MAX: usize = 400;

/// Character budget for the appended drug-interactions clause.
const INTERACTIONS_MAX: usize = 200;

const HOW_TO_USE_FALLBACK: &str =
    "Follow the dosing instructions on the label or as prescribed by your healthcare provider.";

const WHEN_TO_USE_FALLBACK: &str = "Use as directed by your healthcare provider.";

const SIDE_EFFECTS_FALLBACK: &str =
    "Side effects may occur. Consult a healthcare provider if you experience any adverse reactions.";

const WARNINGS_FALLBACK: &str = "Read all warnings on the product label. Consult a healthcare \
     provider before use if you have any medical conditions or are taking other medications.";

/// Shape a raw label record into a fully populated [`MedicineRecord`].
pub fn normalize_label(result: &LabelResult, original_query: &str) -> MedicineRecord {
    let brand = first_name(&result.openfda.brand_name);
    let generic = first_name(&result.openfda.generic_name);
    let name = match (brand, generic) {
        (Some(brand), Some(generic)) => format!("{brand} ({generic})"),
        (Some(brand), None) => brand.to_string(),
        (None, Some(generic)) => generic.to_string(),
        (None, None) => original_query.to_string(),
    };

    let description = first_block(&result.description)
        .map(|block| extract_first_paragraph(block, DESCRIPTION_MAX))
        .or_else(|| {
            first_block(&result.purpose).map(|block| extract_first_paragraph(block, DESCRIPTION_MAX))
        })
        .or_else(|| {
            first_block(&result.active_ingredient).map(|block| {
                format!(
                    "Active ingredient: {}",
                    extract_first_paragraph(block, DESCRIPTION_MAX)
                )
            })
        })
        .unwrap_or_else(|| {
            format!("{name} is a medication. Please consult a healthcare provider for detailed information.")
        });

    let how_to_use = first_block(&result.dosage_and_administration)
        .map(|block| extract_first_paragraph(block, SECTION_MAX))
        .unwrap_or_else(|| HOW_TO_USE_FALLBACK.to_string());

    let when_to_use = first_block(&result.indications_and_usage)
        .or_else(|| first_block(&result.purpose))
        .map(|block| extract_first_paragraph(block, SECTION_MAX))
        .unwrap_or_else(|| WHEN_TO_USE_FALLBACK.to_string());

    let side_effects = first_block(&result.adverse_reactions)
        .map(|block| extract_first_paragraph(block, SECTION_MAX))
        .unwrap_or_else(|| SIDE_EFFECTS_FALLBACK.to_string());

    // Warnings and interactions concatenate; they are never alternatives.
    let mut warnings = first_block(&result.warnings)
        .map(|block| extract_first_paragraph(block, SECTION_MAX))
        .unwrap_or_else(|| WARNINGS_FALLBACK.to_string());
    if let Some(block) = first_block(&result.drug_interactions) {
        let interactions = extract_first_paragraph(block, INTERACTIONS_MAX);
        if !interactions.is_empty() {
            warnings.push_str(" Drug interactions: ");
            warnings.push_str(&interactions);
        }
    }

    MedicineRecord {
        name,
        description,
        how_to_use,
        when_to_use,
        side_effects,
        warnings,
    }
}

/// First non-blank name in an openfda name list.
fn first_name(names: &[String]) -> Option<&str> {
    names
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .find(|name| !name.is_empty())
}
