/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// HTTP transport with rate limiting and status mapping
pub mod http;
/// Request bodies sent to the API
pub mod requests;
/// Response bodies received from the API
pub mod responses;
