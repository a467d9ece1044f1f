/// Map a (trimmed) source column name to its canonical name.
///
/// Matching is exact and case-sensitive: `"year "` must be trimmed first and
/// `"YEAR"` is passed through untouched.
pub fn canonical_name(name: &str) -> &str {
    match name {
        "Year" => "year",
        "Industry" => "industry",
        "AttackVector" | "Attack Vector" => "attack_vector",
        "Records" | "RecordsAffected" | "Records Exposed" => "records_exposed",
        "OrgSize" | "Org Size" => "org_size",
        "Country" => "country",
        other => other,
    }
}
