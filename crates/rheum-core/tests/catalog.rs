use rheum_core::catalog::{catalog, COMMON_MEDICATIONS, JOINTS};
use rheum_core::models::intake::{ClinicalFlag, SignGroup};

#[test]
fn catalog_lists_every_flag_once_in_prompt_order() {
    let catalog = catalog();
    let flags: Vec<_> = catalog.flags.iter().map(|f| f.flag).collect();
    assert_eq!(flags, ClinicalFlag::ALL.to_vec());

    let articular = catalog
        .flags
        .iter()
        .filter(|f| f.group == SignGroup::Articular)
        .count();
    assert_eq!(articular, 7);
}

#[test]
fn catalog_carries_lookup_tables() {
    let catalog = catalog();
    assert_eq!(catalog.joints.len(), JOINTS.len());
    assert_eq!(catalog.medications.len(), COMMON_MEDICATIONS.len());
    assert_eq!(catalog.patterns[1].label, "Oligoarticular (2-4 joints)");
    assert_eq!(catalog.onsets[2].label, "Episodic / Recurrent");
}
