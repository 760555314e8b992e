/// Domain types for Scholar Match
mod matching;
mod opportunity;
mod user;

pub use matching::Match;
pub use opportunity::{CreateOpportunity, Opportunity, OpportunityId};
pub use user::{CreateUser, Role, User, UserId};
