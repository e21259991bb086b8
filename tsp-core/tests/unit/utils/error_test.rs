use super::*;

#[test]
fn can_create_domain_errors() {
    assert_eq!(GenericError::invalid_instance("matrix is empty").to_string(), "invalid instance: matrix is empty");
    assert_eq!(GenericError::invalid_config("rho is zero").to_string(), "invalid configuration: rho is zero");
}

#[test]
fn can_convert_from_other_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");

    assert_eq!(GenericError::from(io_error).to_string(), "no such file");
    assert_eq!(GenericError::from("first"), GenericError::from("first".to_string()));
}
