use pressmill_codec::wire_enum;

wire_enum! {
    /// Kind of change recorded in the audit trail. Deliberately absent from
    /// both policy lists, so it rides the named fallback.
    pub enum AuditAction {
        Created = 0,
        Updated = 1,
        Deleted = 2,
    }
}
