/// Generates a request identifier
///
/// A 21 character identifier of uppercase letters and digits, produced by
/// the `nanoid` crate. Sent as `X-Request-ID` so a request can be matched
/// with the server logs.
///
/// # Examples
/// ```
/// use auth_portal_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 21);
/// ```
pub fn request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(21, &alphabet)
}
