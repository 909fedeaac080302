fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Length rules live on the wire message and are bound to the shared
    // validation functions in `crate::validation`.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .type_attribute(
            ".users.v1.CreateUserRequest",
            "#[derive(validator::Validate)]",
        )
        .field_attribute(
            ".users.v1.CreateUserRequest.username",
            "#[validate(custom(function = \"crate::validation::username\"))]",
        )
        .field_attribute(
            ".users.v1.CreateUserRequest.password",
            "#[validate(custom(function = \"crate::validation::password\"))]",
        )
        .compile_protos(&["proto/users/v1/users.proto"], &["proto/"])?;

    Ok(())
}
