#[derive(Debug)]
pub struct CreateUserDTO {
    pub username: String,
    pub password: String,
}
