use pressmill_codec::wire_enum;

wire_enum! {
    /// Publication lifecycle of a page.
    pub enum PageStatus {
        Draft = 0,
        Published = 1,
        Archived = 2,
    }
}

wire_enum! {
    /// Who can see a published page.
    pub enum PageVisibility {
        Public = 0,
        Hidden = 1,
        Protected = 2,
    }
}

wire_enum! {
    /// Commenting rules applied to a page.
    pub enum CommentPolicy {
        Open = 0,
        Moderated = 1,
        Closed = 2,
    }
}

wire_enum! {
    /// HTTP semantics of a page redirect.
    pub enum RedirectKind {
        Permanent = 0,
        Temporary = 1,
    }
}

wire_enum! {
    /// Editorial review state of submitted content.
    pub enum ReviewState {
        Pending = 0,
        Approved = 1,
        Rejected = 2,
    }
}
