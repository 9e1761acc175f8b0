pub mod memory;
pub mod seed;

pub use self::memory::InMemoryCustomerRepository;
