//! Route index handler.

/// Paths served by the API, in the order they are listed
pub const ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/start/<start>",
    "/api/v1.0/start/<start>/end/<end>",
];

/// Handle GET / requests
pub async fn index_handler() -> String {
    let mut body = String::from("Welcome to the Hawaii vacation weather explorer\n");
    body.push_str("Available routes:\n");
    for route in &ROUTES[..3] {
        body.push_str(route);
        body.push('\n');
    }
    body.push_str("Please write start and end dates in format YYYY-MM-DD\n");
    for route in &ROUTES[3..] {
        body.push_str(route);
        body.push('\n');
    }
    body
}
