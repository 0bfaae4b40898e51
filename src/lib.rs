//! # hrefkit
//!
//! URL pattern token substitution and hypermedia link building.
//!
//! Patterns carry `{name}` placeholders. A [`TokenResolver`] substitutes
//! bound values, optionally extracting them from a domain object through
//! registered binders. [`UrlBuilder`] and [`LinkBuilder`] compose a base URL,
//! a path pattern and optional query segments, including a segment only when
//! every placeholder in it resolved.
//!
//! ## Example
//!
//! ```
//! use hrefkit::{LinkBuilder, TokenBindings, TokenResolver};
//!
//! struct User {
//!     id: String,
//! }
//!
//! let mut builder = LinkBuilder::new("/users/{userId}");
//! builder
//!     .set_base_url("http://api.example.com")
//!     .with_query("expand={expand}")
//!     .set_rel("self")
//!     .set_title("User");
//!
//! let mut resolver = TokenResolver::new();
//! resolver.add_binder_for(|user: &User, tokens: &mut TokenBindings| {
//!     tokens.bind("userId", user.id.as_str());
//!     Ok(())
//! });
//!
//! let user = User { id: "99".into() };
//! let link = builder.build_for(&user, &mut resolver).unwrap();
//! assert_eq!(link.href(), "http://api.example.com/users/99");
//! assert_eq!(link.rel(), Some("self"));
//! assert_eq!(link.title(), Some("User"));
//! ```

pub mod builder;
pub mod error;
pub mod format;
pub mod model;
pub mod resolver;

pub use builder::{LinkBuilder, UrlBuilder};
pub use error::{Error, Result};
pub use format::{BraceFormatter, PatternFormatter};
pub use model::{FieldSource, Link, Resource};
pub use resolver::{FnBinder, TokenBinder, TokenBindings, TokenResolver, TypedBinder};
