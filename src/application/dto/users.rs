//! Mapping between users and the author snapshot shown on articles and
//! profile pages.
use crate::domain::snapshot::AppUserDto;
use crate::domain::user::AppUser;

impl From<&AppUser> for AppUserDto {
    fn from(user: &AppUser) -> Self {
        Self {
            id: user.id.clone(),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
        }
    }
}

impl From<AppUser> for AppUserDto {
    fn from(user: AppUser) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            roles: user.roles,
        }
    }
}

impl From<AppUserDto> for AppUser {
    fn from(dto: AppUserDto) -> Self {
        Self::new_unvalidated(dto.id, dto.user_name, dto.email, dto.roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let dto = AppUserDto::default();
        assert!(dto.is_empty());
        assert!(dto.roles.is_empty());
    }

    #[test]
    fn maps_every_field_both_ways() {
        let user = AppUser::new_unvalidated(
            "auth0|42",
            "Bob",
            "bob@example.com",
            vec!["Author".into(), "User".into()],
        );
        let dto = AppUserDto::from(&user);
        assert_eq!(dto.id, "auth0|42");
        assert_eq!(dto.roles.len(), 2);
        assert_eq!(AppUser::from(dto), user);
    }
}
