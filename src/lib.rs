//! AWS IAM (Identity and Access Management) client for Rust.
//!
//! Requests use the IAM query API: signed GET requests (Signature Version 2)
//! with XML responses. Both an async client and, behind the `blocking`
//! feature, a sync client are provided, supporting:
//!
//! - [`Client::create_user`] — Create a user
//! - [`Client::get_user`] — Look up a user or the calling identity
//! - [`Client::delete_user`] — Delete a user
//! - [`Client::create_access_key`] — Create an access key for a user
//! - [`Client::delete_access_key`] — Delete an access key
//!
//! # Quick Start (async)
//!
//! ```no_run
//! use rs_aws_iam::{Client, Credential, Region};
//!
//! # async fn example() -> rs_aws_iam::Result<()> {
//! let client = Client::new(
//!     Credential::new("your-access-key-id", "your-secret-access-key"),
//!     Region::us_east_1(),
//! )?;
//!
//! let resp = client.create_user("bob", "/").await?;
//! println!("Created {} ({})", resp.user.name, resp.user.arn);
//!
//! let key = client.create_access_key("bob").await?;
//! println!("New access key: {}", key.access_key.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod response;
pub mod sign;
pub mod xml;

#[cfg(feature = "blocking")]
pub mod blocking;

mod exec;
mod request;
mod transport;

pub use client::Client;
pub use config::{ClientConfig, Region, SignatureMethod};
pub use credential::Credential;
pub use error::{IamError, Result, ServiceError};
pub use response::{
    AccessKey, CreateAccessKeyResponse, CreateUserResponse, GetUserResponse, SimpleResponse, User,
};
pub use sign::QueryParams;

// Compile-time assertions: key types must be Send + Sync for use across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Client>;
    let _ = assert_send_sync::<IamError>;
    let _ = assert_send_sync::<Credential>;
};
