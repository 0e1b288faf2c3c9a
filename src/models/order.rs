//! Customer order type.

use super::Product;

/// A customer order: an ordered list of products picked in the same batch.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Order, Product, Side};
///
/// let order = Order::new(1, 480.0, 0.0, vec![
///     Product::new(1, 0, Side::Left, 2.0, 1.5).unwrap(),
///     Product::new(2, 3, Side::Right, 8.0, 0.5).unwrap(),
/// ]);
/// assert_eq!(order.len(), 2);
/// assert!((order.weight() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: usize,
    due_date: f64,
    arrival_time: f64,
    weight: f64,
    products: Vec<Product>,
}

impl Order {
    /// Creates an order; its weight is the sum of its products' weights.
    pub fn new(id: usize, due_date: f64, arrival_time: f64, products: Vec<Product>) -> Self {
        let weight = products.iter().map(Product::weight).sum();
        Self {
            id,
            due_date,
            arrival_time,
            weight,
            products,
        }
    }

    /// Order ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Due date of the order.
    pub fn due_date(&self) -> f64 {
        self.due_date
    }

    /// Time the order became known.
    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    /// Total weight of the order's products.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Products in this order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the order has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Appends a product and updates the order weight.
    pub fn push_product(&mut self, product: Product) {
        self.weight += product.weight();
        self.products.push(product);
    }
}
