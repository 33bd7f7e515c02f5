use super::*;

#[test]
fn stable_hash_matches_pinned_values() {
    assert_eq!(stable_hash("Serenity"), 2_238_642_105_896_016_214);
    assert_eq!(stable_hash("Ocean"), 18_361_499_013_759_943_010);
    assert_eq!(stable_hash("ocean"), 5_165_537_930_464_173_256);
}

#[test]
fn stable_hash_is_sensitive_to_every_byte() {
    let base = stable_hash("Serenity");
    assert_ne!(base, stable_hash("Serenitz"));
    assert_ne!(base, stable_hash("serenity"));
    assert_ne!(base, stable_hash("Serenity "));
}

#[test]
fn stable_hash_uses_utf8_bytes() {
    assert_eq!(stable_hash("Diwali ✨"), stable_hash("Diwali \u{2728}"));
    assert_ne!(stable_hash("é"), stable_hash("e\u{301}"));
}

#[test]
fn default_seed_trims_and_reduces() {
    assert_eq!(default_seed("ocean"), 464_173_256);
    assert_eq!(default_seed("  ocean\n"), default_seed("ocean"));
    assert!(default_seed("Serenity") < SEED_MODULUS);
}
