use chrono::NaiveDate;
use rapleaf_api::types::{MembershipSite, Occupation, Person};
use rapleaf_api::wire::WirePerson;
use rapleaf_api::Error;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn site(site: &str, exists: &str) -> MembershipSite {
    MembershipSite {
        site: site.to_string(),
        exists: exists.to_string(),
        ..Default::default()
    }
}

fn occupation(company: &str, job_title: &str) -> Occupation {
    Occupation {
        company: company.to_string(),
        job_title: job_title.to_string(),
    }
}

fn minimal_person() -> Person {
    Person {
        id: "b34282025d7e2c5db6786a8daaab48c7".to_string(),
        earliest_known_activity: NaiveDate::from_ymd_opt(2010, 5, 27),
        memberships: vec![
            site("bebo.com", "false"),
            site("facebook.com", "unknown"),
            site("flickr.com", "false"),
            site("friendster.com", "false"),
            site("hi5.com", "false"),
            site("linkedin.com", "tbd"),
            site("livejournal.com", "false"),
            site("metroflog.com", "false"),
            site("multiply.com", "unknown"),
            site("myspace.com", "false"),
            site("myyearbook.com", "false"),
            site("plaxo.com", "false"),
        ],
        ..Default::default()
    }
}

fn profile_person() -> Person {
    Person {
        id: "97fc425100000000".to_string(),
        name: "John Q Public".to_string(),
        gender: "male".to_string(),
        location: "Albuquerque, New Mexico, United States".to_string(),
        num_friends: 156,
        age: 28,
        earliest_known_activity: NaiveDate::from_ymd_opt(2001, 11, 16),
        latest_known_activity: NaiveDate::from_ymd_opt(2010, 5, 8),
        occupations: vec![
            occupation("Apple", "Software Developer"),
            occupation("GE", "VP Marketing"),
            occupation("Startup.com", "Founder"),
        ],
        memberships: vec![
            site("bebo.com", "false"),
            site("facebook.com", "true"),
            site("flickr.com", "false"),
            MembershipSite {
                profile_url: "http://profiles.friendster.com/3543228".to_string(),
                image_url: "http://photos.friendster.com/photos/82/11/3543228/13281738852124s.jpg"
                    .to_string(),
                num_friends: 16,
                ..site("friendster.com", "true")
            },
            MembershipSite {
                profile_url: "http://www.linkedin.com/in/johnqpublic".to_string(),
                image_url:
                    "http://media.linkedin.com/mpr/mpr/shrink_80_80/p/2/000/016/0f0/36426ef.jpg"
                        .to_string(),
                num_friends: 166,
                ..site("linkedin.com", "true")
            },
            site("livejournal.com", "false"),
            site("metroflog.com", "false"),
            site("multiply.com", "false"),
            site("myspace.com", "false"),
            site("myyearbook.com", "false"),
            site("plaxo.com", "false"),
            MembershipSite {
                profile_url: "http://twitter.com/johnqpublic".to_string(),
                num_followers: 14,
                num_followed: 4,
                ..site("twitter.com", "true")
            },
            MembershipSite {
                profile_url: "http://www.pandora.com/people/johnqpublic".to_string(),
                ..site("pandora.com", "true")
            },
            MembershipSite {
                profile_url: "http://www.tagged.com/profile.html?uid=5378192615".to_string(),
                ..site("tagged.com", "true")
            },
        ],
        email_address: String::new(),
    }
}

#[test]
fn deserialize_minimal_person() {
    let xml = load_fixture("person_minimal.xml");
    let person = Person::from_xml(&xml).unwrap().unwrap();
    assert_eq!(person, minimal_person());

    assert_eq!(person.name, "");
    assert_eq!(person.gender, "");
    assert_eq!(person.location, "");
    assert_eq!(person.age, 0);
    assert_eq!(person.num_friends, 0);
    assert_eq!(person.latest_known_activity, None);
    assert!(person.occupations.is_empty());
    assert_eq!(person.memberships.len(), 12);
    for membership in &person.memberships {
        assert_eq!(membership.num_friends, 0);
        assert_eq!(membership.num_followers, 0);
        assert_eq!(membership.num_followed, 0);
        assert_eq!(membership.profile_url, "");
        assert_eq!(membership.image_url, "");
    }
}

#[test]
fn deserialize_person_with_profile() {
    let xml = load_fixture("person_with_profile.xml");
    let person = Person::from_xml(&xml).unwrap().unwrap();
    assert_eq!(person.occupations.len(), 3);
    assert_eq!(person.memberships.len(), 14);
    assert_eq!(person.memberships[12].site, "pandora.com");
    assert_eq!(person.memberships[13].site, "tagged.com");
    assert_eq!(person, profile_person());
}

#[test]
fn membership_count_is_primary_plus_supplemental() {
    let xml = load_fixture("person_with_profile.xml");
    let wire = WirePerson::from_xml(&xml).unwrap().unwrap();
    let primary = wire.memberships.primary.entries.len();
    let supplemental = wire.memberships.supplemental.entries.len();
    assert_eq!((primary, supplemental), (12, 2));

    let person = Person::from(wire);
    assert_eq!(person.memberships.len(), primary + supplemental);
}

#[test]
fn normalizing_twice_is_stable() {
    let xml = load_fixture("person_with_profile.xml");
    let first = Person::from_xml(&xml).unwrap();
    let second = Person::from_xml(&xml).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.map(|p| p.to_string()),
        second.map(|p| p.to_string())
    );
}

#[test]
fn malformed_counts_and_dates_fall_back() {
    let xml = r#"<person id="x"><basics><age>unknown</age><num_friends>-</num_friends><earliest_known_activity>sometime</earliest_known_activity><latest_known_activity>2010-02-30</latest_known_activity></basics><memberships><primary><membership site="a.com" exists="true" num_friends="many"/></primary></memberships></person>"#;
    let person = Person::from_xml(xml).unwrap().unwrap();
    assert_eq!(person.age, 0);
    assert_eq!(person.num_friends, 0);
    assert_eq!(person.earliest_known_activity, None);
    assert_eq!(person.latest_known_activity, None);
    assert_eq!(person.memberships[0].num_friends, 0);
}

#[test]
fn missing_id_is_empty() {
    let person = Person::from_xml("<person><basics/></person>").unwrap().unwrap();
    assert_eq!(person.id, "");
}

#[test]
fn empty_body_is_no_person() {
    assert_eq!(Person::from_xml("").unwrap(), None);
}

#[test]
fn malformed_xml_returns_error() {
    let result = Person::from_xml(r#"<person id="x"><basics></memberships></person>"#);
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn non_person_root_returns_error() {
    let result = Person::from_xml(r#"<error code="500">Internal failure</error>"#);
    assert!(matches!(result, Err(Error::UnexpectedRoot(_))));
}
