mod occupation;
pub use self::occupation::Occupation;

mod membership;
pub use self::membership::MembershipSite;

mod person;
pub use self::person::Person;
