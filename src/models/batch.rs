//! Weight-bounded batch of orders picked in one tour.

use super::{Order, Product};
use crate::error::ModelError;

/// A group of orders collected together by one picker in a single tour.
///
/// The total order weight never exceeds `max_weight`. Order sequence does
/// not influence the routing cost.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Batch, Order, Product, Side};
///
/// let mut batch = Batch::new(10.0);
/// let heavy = Order::new(1, 0.0, 0.0, vec![Product::new(1, 0, Side::Left, 1.0, 8.0).unwrap()]);
/// let light = Order::new(2, 0.0, 0.0, vec![Product::new(2, 1, Side::Left, 1.0, 3.0).unwrap()]);
///
/// batch.add_order(heavy).unwrap();
/// assert!(batch.add_order(light).is_err());
/// assert_eq!(batch.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    max_weight: f64,
    weight: f64,
    orders: Vec<Order>,
}

impl Batch {
    /// Creates an empty batch with the given weight capacity.
    pub fn new(max_weight: f64) -> Self {
        Self {
            max_weight,
            weight: 0.0,
            orders: Vec::new(),
        }
    }

    /// Adds an order if it fits the remaining capacity.
    pub fn add_order(&mut self, order: Order) -> Result<(), ModelError> {
        if !self.can_accept(&order) {
            return Err(ModelError::CapacityExceeded {
                order_id: order.id(),
                weight: order.weight(),
                remaining: self.remaining_capacity(),
            });
        }
        self.weight += order.weight();
        self.orders.push(order);
        Ok(())
    }

    /// Removes the order with the given ID, returning it.
    pub fn remove_order(&mut self, order_id: usize) -> Option<Order> {
        let idx = self.orders.iter().position(|o| o.id() == order_id)?;
        let order = self.orders.swap_remove(idx);
        self.weight -= order.weight();
        Some(order)
    }

    /// Returns `true` if the order fits the remaining capacity.
    pub fn can_accept(&self, order: &Order) -> bool {
        self.weight + order.weight() <= self.max_weight
    }

    /// Weight capacity.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Current total weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Capacity still available.
    pub fn remaining_capacity(&self) -> f64 {
        self.max_weight - self.weight
    }

    /// Orders in this batch.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns `true` if the batch has no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterates over every product of every order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.orders.iter().flat_map(|o| o.products().iter())
    }

    /// Total number of items to pick.
    pub fn item_count(&self) -> usize {
        self.orders.iter().map(Order::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;

    fn order(id: usize, weight: f64) -> Order {
        Order::new(
            id,
            0.0,
            0.0,
            vec![Product::new(id, 0, Side::Left, 1.0, weight).expect("valid")],
        )
    }

    #[test]
    fn test_batch_empty() {
        let b = Batch::new(10.0);
        assert!(b.is_empty());
        assert_eq!(b.item_count(), 0);
        assert_eq!(b.weight(), 0.0);
        assert_eq!(b.remaining_capacity(), 10.0);
    }

    #[test]
    fn test_batch_capacity() {
        let mut b = Batch::new(10.0);
        b.add_order(order(1, 4.0)).expect("fits");
        b.add_order(order(2, 6.0)).expect("fits exactly");
        let err = b.add_order(order(3, 0.5)).expect_err("full");
        assert!(matches!(
            err,
            ModelError::CapacityExceeded { order_id: 3, .. }
        ));
        assert_eq!(b.len(), 2);
        assert!((b.weight() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_batch_remove() {
        let mut b = Batch::new(10.0);
        b.add_order(order(1, 4.0)).expect("fits");
        b.add_order(order(2, 5.0)).expect("fits");
        let removed = b.remove_order(1).expect("present");
        assert_eq!(removed.id(), 1);
        assert!((b.weight() - 5.0).abs() < 1e-10);
        assert!(b.remove_order(1).is_none());
        assert!(b.can_accept(&order(3, 5.0)));
    }

    #[test]
    fn test_batch_products() {
        let mut b = Batch::new(100.0);
        b.add_order(order(1, 1.0)).expect("fits");
        b.add_order(order(2, 1.0)).expect("fits");
        assert_eq!(b.item_count(), 2);
        let ids: Vec<usize> = b.products().map(Product::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
