//! sshprep - Prepare SSH access and a git identity for CI jobs.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── setup         # Full provisioning run
//! │   ├── validate      # Input gate only
//! │   ├── identity      # Preview the resolved git identity
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── inputs        # Raw input capture
//!     ├── validation    # Field validators and the input gate
//!     ├── config        # SSH config and git identity derivation
//!     ├── context       # CI event context
//!     ├── identity      # Git identity fallback chain
//!     ├── exec          # Command runner trait
//!     ├── git           # git config application
//!     ├── ssh           # SSH setup trait and JSON handoff
//!     └── provision     # The pipeline
//! ```
//!
//! Inputs and CI context are passed in explicitly, so the core can be
//! driven without a CI runner:
//!
//! ```no_run
//! use sshprep::core::context::CiContext;
//! use sshprep::core::exec::DryRunRunner;
//! use sshprep::core::inputs::RawInputs;
//! use sshprep::core::provision::provision;
//! use sshprep::core::ssh::Handoff;
//!
//! let inputs = RawInputs::normalized(
//!     None, Some("22".into()), None, None,
//!     Some("ssh-ed25519 AAAA...".into()), None, None,
//! );
//! let ctx = CiContext::with_actor("bob");
//! let report = provision(&inputs, &ctx, &Handoff::default(), &DryRunRunner)?;
//! assert_eq!(report.resolution.name(), "bob");
//! # Ok::<(), sshprep::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
