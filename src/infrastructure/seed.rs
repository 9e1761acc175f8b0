use rand::Rng;

use crate::domain::customer::{Customer, CustomerFields};

/// 起動時に投入する顧客数
pub const SEED_SIZE: usize = 50;

static NAMES: [&str; SEED_SIZE] = [
    "John Smith",
    "Emily Johnson",
    "Michael Brown",
    "Sarah Davis",
    "David Wilson",
    "Jessica Moore",
    "Christopher Taylor",
    "Amanda Anderson",
    "Daniel Thomas",
    "Lisa Jackson",
    "Matthew White",
    "Jennifer Harris",
    "Anthony Martin",
    "Michelle Thompson",
    "Mark Garcia",
    "Ashley Martinez",
    "Steven Robinson",
    "Stephanie Clark",
    "Joshua Rodriguez",
    "Rebecca Lewis",
    "Kevin Lee",
    "Nicole Walker",
    "Brian Hall",
    "Christina Allen",
    "Jason Young",
    "Elizabeth Hernandez",
    "Ryan King",
    "Samantha Wright",
    "Nicholas Lopez",
    "Lauren Hill",
    "Jacob Scott",
    "Rachel Green",
    "Tyler Adams",
    "Megan Baker",
    "Brandon Gonzalez",
    "Kayla Nelson",
    "Justin Carter",
    "Victoria Mitchell",
    "Aaron Perez",
    "Alexis Roberts",
    "Eric Turner",
    "Sydney Phillips",
    "Jonathan Campbell",
    "Jasmine Parker",
    "Samuel Evans",
    "Brittany Edwards",
    "Andrew Collins",
    "Danielle Stewart",
    "Joseph Sanchez",
    "Kimberly Morris",
];

static CITIES: [&str; 50] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "Charlotte",
    "San Francisco",
    "Indianapolis",
    "Seattle",
    "Denver",
    "Washington DC",
    "Boston",
    "El Paso",
    "Nashville",
    "Detroit",
    "Oklahoma City",
    "Portland",
    "Las Vegas",
    "Memphis",
    "Louisville",
    "Baltimore",
    "Milwaukee",
    "Albuquerque",
    "Tucson",
    "Fresno",
    "Sacramento",
    "Mesa",
    "Kansas City",
    "Atlanta",
    "Long Beach",
    "Colorado Springs",
    "Raleigh",
    "Miami",
    "Virginia Beach",
    "Omaha",
    "Oakland",
    "Minneapolis",
    "Tulsa",
    "Arlington",
    "Tampa",
    "New Orleans",
];

static DOMAINS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "company.com",
];

/// ID 1..=50 のサンプル顧客を生成する
///
/// 氏名・都市は固定リストを順に使い、メールのドメインと電話番号は乱数で決める。
pub fn generate<R: Rng>(rng: &mut R) -> Vec<Customer> {
    (1..=SEED_SIZE)
        .map(|id| {
            let name = NAMES[(id - 1) % NAMES.len()];
            let city = CITIES[(id - 1) % CITIES.len()];
            let fields = CustomerFields {
                name: name.to_owned(),
                email: email(name, rng),
                phone: phone(rng),
                city: city.to_owned(),
            };
            Customer::create((id as i64).into(), fields)
        })
        .collect()
}

fn email<R: Rng>(name: &str, rng: &mut R) -> String {
    let (first, last) = name.split_once(' ').unwrap_or((name, ""));
    let domain = DOMAINS[rng.random_range(0..DOMAINS.len())];
    format!(
        "{}.{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        domain
    )
}

fn phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "({}) {}-{}",
        rng.random_range(200..999),
        rng.random_range(200..999),
        rng.random_range(1000..9999)
    )
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::domain::Entity;

    use super::*;

    fn is_phone(phone: &str) -> bool {
        let bytes = phone.as_bytes();
        let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
        bytes.len() == 14
            && bytes[0] == b'('
            && digits(1..4)
            && &bytes[4..6] == b") "
            && digits(6..9)
            && bytes[9] == b'-'
            && digits(10..14)
    }

    #[test]
    fn test_generate_fifty_sequential_ids() {
        let customers = generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(customers.len(), SEED_SIZE);
        for (i, customer) in customers.iter().enumerate() {
            assert_eq!(*customer.id(), i as i64 + 1);
        }
    }

    #[test]
    fn test_generate_names_and_cities_in_order() {
        let customers = generate(&mut StdRng::seed_from_u64(2));
        assert_eq!(customers[0].name(), "John Smith");
        assert_eq!(customers[0].city(), "New York");
        assert_eq!(customers[49].name(), "Kimberly Morris");
        assert_eq!(customers[49].city(), "New Orleans");
    }

    #[test]
    fn test_generate_email_shape() {
        let customers = generate(&mut StdRng::seed_from_u64(3));
        for customer in &customers {
            let (local, domain) = customer.email().split_once('@').unwrap();
            let expected = customer.name().to_lowercase().replace(' ', ".");
            assert_eq!(local, expected);
            assert!(DOMAINS.contains(&domain), "unexpected domain {}", domain);
        }
    }

    #[test]
    fn test_generate_phone_shape_and_ranges() {
        let customers = generate(&mut StdRng::seed_from_u64(4));
        for customer in &customers {
            let phone = customer.phone();
            assert!(is_phone(phone), "malformed phone {}", phone);
            let area: u32 = phone[1..4].parse().unwrap();
            let exchange: u32 = phone[6..9].parse().unwrap();
            let line: u32 = phone[10..14].parse().unwrap();
            assert!((200..=999).contains(&area));
            assert!((200..=999).contains(&exchange));
            assert!((1000..=9999).contains(&line));
        }
    }
}
