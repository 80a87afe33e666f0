//! Repository traits (ports)

mod repositories;

pub use repositories::{
    LikeAction, LikeOutcome, PlaceRepository, RepoResult, ReviewQuery, ReviewRepository,
    UserRepository, VisitOutcome, VisitRepository,
};
