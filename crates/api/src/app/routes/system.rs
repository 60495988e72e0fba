/// Liveness probe.
pub async fn root() -> &'static str {
    "TravelEase Server is Running"
}
