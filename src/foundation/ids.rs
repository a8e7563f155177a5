use slotmap::new_key_type;

new_key_type! {
    /// Handle to a visual node owned by the presentation layer.
    pub struct NodeId;
    /// Handle to a viewport subscription.
    pub struct SubscriptionId;
    /// Handle to an element registered with the reveal controller.
    pub struct RevealHandle;
    /// Handle to an element registered with the parallax controller.
    pub struct ParallaxHandle;
}
