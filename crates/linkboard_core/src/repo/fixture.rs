//! Compiled-in dashboard fixture.
//!
//! Eight contacts, five experiences. Inputs are literal constants, so date
//! construction failures are programming errors.

use crate::model::contact::{Contact, ContactId, Employer, Location};
use crate::model::experience::Experience;
use chrono::{DateTime, NaiveDate, Utc};

struct ContactSeed {
    id: ContactId,
    first_name: &'static str,
    last_name: &'static str,
    profile_slug: &'static str,
    city: &'static str,
    state: &'static str,
    country: &'static str,
    company: &'static str,
    website: &'static str,
    industry: &'static str,
    role: &'static str,
    email: Option<&'static str>,
    persona: &'static str,
    connected: (i32, u32, u32),
    created: (i32, u32, u32),
}

const CONTACT_SEEDS: &[ContactSeed] = &[
    ContactSeed {
        id: 1,
        first_name: "Terrence",
        last_name: "McLean",
        profile_slug: "terrencemclean",
        city: "Los Altos",
        state: "California",
        country: "United States",
        company: "No Labels",
        website: "nolabels.org",
        industry: "Politics",
        role: "Co-Chair",
        email: None,
        persona: "Executive",
        connected: (2025, 1, 15),
        created: (2025, 1, 23),
    },
    ContactSeed {
        id: 2,
        first_name: "Sarah",
        last_name: "Johnson",
        profile_slug: "sarahjohnson",
        city: "San Francisco",
        state: "California",
        country: "United States",
        company: "TechCorp",
        website: "techcorp.com",
        industry: "Technology",
        role: "CTO",
        email: Some("sarah@techcorp.com"),
        persona: "Technical Decision Maker",
        connected: (2025, 2, 10),
        created: (2025, 2, 15),
    },
    ContactSeed {
        id: 3,
        first_name: "Michael",
        last_name: "Chen",
        profile_slug: "michaelchen",
        city: "Seattle",
        state: "Washington",
        country: "United States",
        company: "CloudSoft",
        website: "cloudsoft.io",
        industry: "Software",
        role: "Senior Developer",
        email: Some("m.chen@cloudsoft.io"),
        persona: "Tech Practitioner",
        connected: (2025, 3, 5),
        created: (2025, 3, 8),
    },
    ContactSeed {
        id: 4,
        first_name: "Emma",
        last_name: "Rodriguez",
        profile_slug: "emmarodriguez",
        city: "Austin",
        state: "Texas",
        country: "United States",
        company: "SalesForce Pro",
        website: "salesforcepro.com",
        industry: "Sales Technology",
        role: "VP of Sales",
        email: Some("emma@salesforcepro.com"),
        persona: "Sales Leader",
        connected: (2025, 1, 28),
        created: (2025, 2, 1),
    },
    ContactSeed {
        id: 5,
        first_name: "David",
        last_name: "Kim",
        profile_slug: "davidkim",
        city: "Toronto",
        state: "Ontario",
        country: "Canada",
        company: "DataMind",
        website: "datamind.ca",
        industry: "Data Analytics",
        role: "Data Scientist",
        email: Some("david@datamind.ca"),
        persona: "Tech Practitioner",
        connected: (2025, 4, 12),
        created: (2025, 4, 15),
    },
    ContactSeed {
        id: 6,
        first_name: "Lisa",
        last_name: "Thompson",
        profile_slug: "lisathompson",
        city: "London",
        state: "England",
        country: "United Kingdom",
        company: "FinTech Solutions",
        website: "fintechsolutions.co.uk",
        industry: "Financial Technology",
        role: "Product Manager",
        email: Some("lisa@fintechsolutions.co.uk"),
        persona: "Budget Owner",
        connected: (2025, 2, 20),
        created: (2025, 2, 25),
    },
    ContactSeed {
        id: 7,
        first_name: "Carlos",
        last_name: "Martinez",
        profile_slug: "carlosmartinez",
        city: "Madrid",
        state: "Madrid",
        country: "Spain",
        company: "EuroTech",
        website: "eurotech.es",
        industry: "Technology Consulting",
        role: "Consultant",
        email: Some("carlos@eurotech.es"),
        persona: "Technical Decision Maker",
        connected: (2025, 3, 18),
        created: (2025, 3, 22),
    },
    ContactSeed {
        id: 8,
        first_name: "Jennifer",
        last_name: "Brown",
        profile_slug: "jenniferbrown",
        city: "New York",
        state: "New York",
        country: "United States",
        company: "MediaCorp",
        website: "mediacorp.com",
        industry: "Media & Entertainment",
        role: "Creative Director",
        email: Some("jennifer@mediacorp.com"),
        persona: "Executive",
        connected: (2025, 1, 8),
        created: (2025, 1, 12),
    },
];

pub(crate) fn builtin_contacts() -> Vec<Contact> {
    CONTACT_SEEDS.iter().map(contact_from_seed).collect()
}

pub(crate) fn builtin_experiences() -> Vec<Experience> {
    vec![
        experience(1, 2, "Accenture", "Senior Consultant", (2020, 3, 15), Some((2023, 8, 31))),
        experience(2, 2, "BetterDatadotco", "Founder & CEO", (2023, 9, 1), None),
        experience(3, 3, "Microsoft", "Software Engineer", (2018, 6, 1), Some((2021, 12, 15))),
        experience(4, 4, "Oracle", "Sales Manager", (2019, 1, 10), Some((2023, 5, 20))),
        experience(5, 5, "IBM", "Data Analyst", (2020, 8, 15), Some((2024, 1, 30))),
    ]
}

fn contact_from_seed(seed: &ContactSeed) -> Contact {
    Contact {
        id: seed.id,
        first_name: seed.first_name.to_string(),
        last_name: seed.last_name.to_string(),
        linkedin_profile_url: format!("https://www.linkedin.com/in/{}", seed.profile_slug),
        location: Location {
            city: seed.city.to_string(),
            state: seed.state.to_string(),
            country: seed.country.to_string(),
        },
        employer: Employer {
            name: seed.company.to_string(),
            website: seed.website.to_string(),
            industry: seed.industry.to_string(),
        },
        current_role: seed.role.to_string(),
        email_address: seed.email.map(str::to_string),
        buyer_persona_type: seed.persona.to_string(),
        connection_date: date(seed.connected),
        created_at: midnight_utc(seed.created),
    }
}

fn experience(
    id: u32,
    contact_id: ContactId,
    company_name: &str,
    position: &str,
    start: (i32, u32, u32),
    end: Option<(i32, u32, u32)>,
) -> Experience {
    Experience {
        id,
        contact_id,
        company_name: company_name.to_string(),
        position: position.to_string(),
        start_date: date(start),
        end_date: end.map(date),
    }
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid calendar dates")
}

fn midnight_utc(ymd: (i32, u32, u32)) -> DateTime<Utc> {
    date(ymd)
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc()
}
