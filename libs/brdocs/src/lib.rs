//! # brdocs
//!
//! Validation, formatting and generation of Brazilian document numbers.
//!
//! ## Supported Documents
//!
//! | Module | Document | Canonical form |
//! |--------|----------|----------------|
//! | [`cnpj`] | Cadastro Nacional da Pessoa Jurídica | `00.000.000/0000-00` |
//! | [`cpf`] | Cadastro de Pessoas Físicas | `000.000.000-00` |
//! | [`pis`] | Programa de Integração Social | `000.00000.00-0` |
//!
//! ## Design Principles
//!
//! - Every document kind is a [`DocumentProfile`] constant driving one shared engine
//! - String-level operations never fail: malformed input yields `false` or `None`
//! - Masking and formatting only ever touch punctuation, never digit content
//! - Typed documents ([`Cnpj`], [`Cpf`], [`Pis`]) can only hold checksum-valid numbers
//!
//! ## Example
//!
//! ```
//! use brdocs::{cpf, Options};
//!
//! assert!(cpf::test("111.444.777-35", Options::default()));
//! assert!(!cpf::test("11144477735", Options { strict: true }));
//! assert_eq!(cpf::format("11144477735"), "111.444.777-35");
//! ```

mod checksum;
mod error;
mod macros;
mod profile;
mod types;

pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod pis;

pub use checksum::check_digit;
pub use error::DocumentError;
pub use profile::{DocumentProfile, EmbeddedField, Options, DIGIT_SLOT};
pub use types::*;
