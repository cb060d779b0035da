// src/fakes/users.rs
use uuid::Uuid;

use super::rng::FakeRng;
use super::text;
use crate::application::dto::AppUserDto;
use crate::domain::user::{AppUser, Role};

fn generate(rng: &mut FakeRng) -> AppUser {
    let (first, last) = text::full_name(rng);
    let email = text::email(rng, &first, &last);
    let role = *rng.pick(&Role::ALL);
    AppUser::new_unvalidated(
        Uuid::new_v4().to_string(),
        format!("{first} {last}"),
        email,
        vec![role.as_str().to_string()],
    )
}

pub fn new_app_user(use_seed: bool) -> AppUser {
    generate(&mut FakeRng::new(use_seed))
}

pub fn app_users_many(count: usize, use_seed: bool) -> Vec<AppUser> {
    let mut rng = FakeRng::new(use_seed);
    (0..count).map(|_| generate(&mut rng)).collect()
}

pub fn new_app_user_dto(use_seed: bool) -> AppUserDto {
    AppUserDto::from(new_app_user(use_seed))
}

pub fn app_user_dtos_many(count: usize, use_seed: bool) -> Vec<AppUserDto> {
    app_users_many(count, use_seed)
        .into_iter()
        .map(AppUserDto::from)
        .collect()
}
