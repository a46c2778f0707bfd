//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

mod session;

pub use session::{
    AccountSession, LoginOutcome, MenuExit, SessionOutcome, TransactionOutcome, CHOICE_PROMPT,
    PIN_PROMPT,
};
