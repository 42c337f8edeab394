use pressmill_codec::wire_enum;

wire_enum! {
    /// Broad media category of an uploaded file.
    pub enum MediaKind {
        Image = 0,
        Video = 1,
        Audio = 2,
        Document = 3,
    }
}

wire_enum! {
    /// Processing state of an uploaded file.
    pub enum FileStatus {
        Uploading = 0,
        Ready = 1,
        Quarantined = 2,
    }
}
