use pressmill_codec::wire_enum;

wire_enum! {
    /// Access level of an account. The only numeric-classified type: roles
    /// travel as raw discriminants for compatibility with existing clients.
    pub enum UserRole {
        Viewer = 0,
        Editor = 1,
        Admin = 2,
    }
}

wire_enum! {
    /// Account lifecycle state.
    pub enum UserStatus {
        Active = 0,
        Suspended = 1,
        Deleted = 2,
    }
}

wire_enum! {
    /// What an address on file is used for.
    pub enum AddressKind {
        Billing = 0,
        Shipping = 1,
        Contact = 2,
    }
}
