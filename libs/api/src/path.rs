pub const PRINTS: &str = "/api/prints";
pub const FILAMENT_USAGE: &str = "/api/filament-usage";

pub fn claim(id: &str) -> String {
    format!("/api/prints/{}/claim", id)
}

pub fn unclaim(id: &str) -> String {
    format!("/api/prints/{}/unclaim", id)
}

pub fn prints_filtered(claimed: bool) -> String {
    format!("/api/prints?claimed={}", claimed)
}
