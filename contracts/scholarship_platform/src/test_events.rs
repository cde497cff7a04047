extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, BytesN, Env, IntoVal, String, Symbol, TryIntoVal,
};

use crate::events::{
    DonationReceived, FundsReleased, ScholarshipAssigned, ScholarshipCreated, StudentRegistered,
};
use crate::{ScholarshipPlatform, ScholarshipPlatformClient};

fn setup() -> (Env, ScholarshipPlatformClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ScholarshipPlatform, ());
    let client = ScholarshipPlatformClient::new(&env, &contract_id);
    (env, client)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn mint(env: &Env, token: &token::Client, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &token.address).mint(to, &amount);
}

#[test]
fn student_registered_event() {
    let (env, client) = setup();
    let student = Address::generate(&env);
    let name = String::from_str(&env, "Alice");
    let document = BytesN::from_array(&env, &[0xabu8; 32]);

    client.register_student(&student, &name, &document);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        Symbol::new(&env, "registered").into_val(&env),
        student.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: StudentRegistered = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        StudentRegistered {
            student,
            name,
            document_hash: document,
        }
    );
}

#[test]
fn scholarship_created_event() {
    let (env, client) = setup();
    let donor = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    mint(&env, &token, &donor, 10_000);

    let scholarship = client.create_scholarship(
        &donor,
        &token.address,
        &String::from_str(&env, "Engineering Fund"),
        &10_000i128,
        &2_500i128,
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        scholarship.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ScholarshipCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ScholarshipCreated {
            scholarship_id: scholarship.id,
            donor,
            token: token.address.clone(),
            total_amount: 10_000,
            initial_amount: 2_500,
        }
    );
}

#[test]
fn donation_received_event() {
    let (env, client) = setup();
    let donor = Address::generate(&env);
    let donator = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    mint(&env, &token, &donator, 1_000);

    let scholarship = client.create_scholarship(
        &donor,
        &token.address,
        &String::from_str(&env, "Medical Fund"),
        &5_000i128,
        &0i128,
    );

    client.donate(&scholarship.id, &donator, &1_000i128);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("donated").into_val(&env),
        scholarship.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: DonationReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationReceived {
            scholarship_id: scholarship.id,
            donator,
            amount: 1_000,
        }
    );
}

#[test]
fn assignment_and_release_events() {
    let (env, client) = setup();
    let donor = Address::generate(&env);
    let student = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    mint(&env, &token, &donor, 10_000);

    client.register_student(
        &student,
        &String::from_str(&env, "Bob"),
        &BytesN::from_array(&env, &[0u8; 32]),
    );
    let scholarship = client.create_scholarship(
        &donor,
        &token.address,
        &String::from_str(&env, "Tech Grant"),
        &10_000i128,
        &10_000i128,
    );

    client.assign_scholarship(&donor, &scholarship.id, &student);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("assigned").into_val(&env),
        scholarship.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: ScholarshipAssigned = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ScholarshipAssigned {
            scholarship_id: scholarship.id,
            donor: donor.clone(),
            student: student.clone(),
        }
    );

    client.release_funds(&donor, &scholarship.id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("released").into_val(&env),
        scholarship.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: FundsReleased = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsReleased {
            scholarship_id: scholarship.id,
            student,
            amount: 10_000,
        }
    );
}
