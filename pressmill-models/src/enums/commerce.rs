use pressmill_codec::wire_enum;

wire_enum! {
    /// Sale state of a product variant.
    pub enum VariantStatus {
        Active = 0,
        Discontinued = 1,
        OutOfStock = 2,
    }
}

wire_enum! {
    /// How inventory is tracked for a variant.
    pub enum StockPolicy {
        Track = 0,
        Ignore = 1,
        Backorder = 2,
    }
}
