//! User entity <-> model mapper

use blog_core::{User, UserId, UserProfile, UserRole};

use crate::models::UserModel;

pub const USER_COLUMNS: &str = "id, email, first_name, last_name, gender, date_of_birth, job, \
     phone, street, city, state, zip_code, country, profile_picture, role, created_at, updated_at";

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from_uuid(model.id),
            email: model.email,
            profile: UserProfile {
                first_name: model.first_name,
                last_name: model.last_name,
                gender: model.gender,
                date_of_birth: model.date_of_birth,
                job: model.job,
                phone: model.phone,
                street: model.street,
                city: model.city,
                state: model.state,
                zip_code: model.zip_code,
                country: model.country,
                profile_picture: model.profile_picture,
            },
            role: UserRole::parse(&model.role),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
