use super::*;

#[test]
fn returns_default_interface() {
    let res = get_default_interface();
    assert!(res.is_ok());
}

#[test]
fn default_interface_has_cidr_notation() {
    let interface = get_default_interface().unwrap();
    let parts: Vec<&str> = interface.cidr.split('/').collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[1].parse::<u8>().is_ok());
}
