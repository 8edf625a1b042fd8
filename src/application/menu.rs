/// Parses a menu selection. Anything that is not an integer yields `None`.
pub fn parse_choice(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
