use rand::Rng;

/// Generates a fresh opaque id for an instruction or endpoint.
///
/// Ids only track identity across edits and reordering; nothing in the type
/// logic reads them.
pub fn new_id() -> String {
    format!("{:032x}", rand::rng().random::<u128>())
}
