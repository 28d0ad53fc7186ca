//! Tests for the Shop registry: linkage, snapshots, and derived queries.

use brewlog::domain::{DomainError, Shop};
use brewlog::util::testing::init_test_setup;

#[test]
fn given_new_entities_when_queried_then_empty_defaults() {
    // Arrange
    init_test_setup();
    let mut shop = Shop::new();

    // Act
    let customer = shop.add_customer("John").unwrap();
    let coffee = shop.add_coffee("Espresso").unwrap();

    // Assert
    assert_eq!(shop.customer(customer).unwrap().name(), "John");
    assert_eq!(shop.coffee(coffee).unwrap().name(), "Espresso");
    assert!(shop.customer_orders(customer).unwrap().is_empty());
    assert!(shop.coffee_orders(coffee).unwrap().is_empty());
    assert!(shop.customer_coffees(customer).unwrap().is_empty());
    assert!(shop.coffee_customers(coffee).unwrap().is_empty());
    assert_eq!(shop.num_orders(coffee).unwrap(), 0);
}

#[test]
fn given_placed_order_when_queried_then_linked_both_ways() {
    // Arrange
    let mut shop = Shop::new();
    let customer = shop.add_customer("John").unwrap();
    let coffee = shop.add_coffee("Espresso").unwrap();

    // Act
    let order = shop.place_order(customer, coffee, 3.5).unwrap();

    // Assert - order fields
    let stored = shop.order(order).unwrap();
    assert_eq!(stored.customer(), customer);
    assert_eq!(stored.coffee(), coffee);
    assert_eq!(stored.price(), 3.5);

    // Assert - bidirectional linkage
    assert!(shop.customer_orders(customer).unwrap().contains(&order));
    assert!(shop.coffee_orders(coffee).unwrap().contains(&order));
    assert_eq!(shop.customer_coffees(customer).unwrap(), vec![coffee]);
    assert_eq!(shop.coffee_customers(coffee).unwrap(), vec![customer]);
}

#[test]
fn given_repeat_orders_when_deduping_then_first_occurrence_order() {
    // Arrange
    let mut shop = Shop::new();
    let john = shop.add_customer("John").unwrap();
    let jane = shop.add_customer("Jane").unwrap();
    let espresso = shop.add_coffee("Espresso").unwrap();
    let latte = shop.add_coffee("Latte").unwrap();

    // Act - same pairs order repeatedly, latte before espresso for Jane
    shop.place_order(john, espresso, 3.5).unwrap();
    shop.place_order(john, espresso, 4.5).unwrap();
    shop.place_order(jane, latte, 4.0).unwrap();
    shop.place_order(jane, espresso, 3.0).unwrap();
    shop.place_order(jane, latte, 4.0).unwrap();

    // Assert - duplicates collapse, first-occurrence order kept
    assert_eq!(shop.num_orders(espresso).unwrap(), 3);
    assert_eq!(shop.coffee_customers(espresso).unwrap(), vec![john, jane]);
    assert_eq!(shop.customer_coffees(jane).unwrap(), vec![latte, espresso]);
    assert_eq!(shop.customer_orders(john).unwrap().len(), 2);
}

#[test]
fn given_orders_when_averaging_then_returns_mean() {
    // Arrange
    let mut shop = Shop::new();
    let customer = shop.add_customer("John").unwrap();
    let coffee = shop.add_coffee("Espresso").unwrap();

    shop.place_order(customer, coffee, 2.0).unwrap();
    shop.place_order(customer, coffee, 4.0).unwrap();
    shop.place_order(customer, coffee, 6.0).unwrap();

    // Act / Assert
    assert_eq!(shop.average_price(coffee).unwrap(), 4.0);
}

#[test]
fn given_no_orders_when_averaging_then_returns_zero() {
    // Arrange
    let mut shop = Shop::new();
    let coffee = shop.add_coffee("Espresso").unwrap();

    // Act / Assert - zero, not an error and not NaN
    assert_eq!(shop.average_price(coffee).unwrap(), 0.0);
}

#[test]
fn given_out_of_range_price_when_ordering_then_no_partial_linkage() {
    // Arrange
    let mut shop = Shop::new();
    let customer = shop.add_customer("Alice").unwrap();
    let coffee = shop.add_coffee("Espresso").unwrap();

    // Act
    let result = shop.place_order(customer, coffee, 15.0);

    // Assert - rejected and neither collection touched
    assert!(matches!(result, Err(DomainError::PriceOutOfRange { .. })));
    assert!(shop.customer_orders(customer).unwrap().is_empty());
    assert!(shop.coffee_orders(coffee).unwrap().is_empty());
    assert_eq!(shop.orders().count(), 0);
}

#[test]
fn given_non_finite_price_when_ordering_then_errors() {
    // Arrange
    let mut shop = Shop::new();
    let customer = shop.add_customer("Alice").unwrap();
    let coffee = shop.add_coffee("Espresso").unwrap();

    // Act / Assert
    assert!(matches!(
        shop.place_order(customer, coffee, f64::NAN),
        Err(DomainError::PriceNotFinite { .. })
    ));
    assert!(matches!(
        shop.place_order(customer, coffee, f64::INFINITY),
        Err(DomainError::PriceNotFinite { .. })
    ));
    assert!(shop.customer_orders(customer).unwrap().is_empty());
}

#[test]
fn given_foreign_handle_when_resolving_then_unknown_error() {
    // Arrange - handles from one shop are meaningless in another
    let mut shop_a = Shop::new();
    let mut shop_b = Shop::new();
    let customer_a = shop_a.add_customer("Alice").unwrap();
    let coffee_b = shop_b.add_coffee("Espresso").unwrap();

    // Act / Assert
    assert!(matches!(
        shop_b.customer(customer_a),
        Err(DomainError::UnknownCustomer(_))
    ));
    assert!(matches!(
        shop_b.place_order(customer_a, coffee_b, 3.5),
        Err(DomainError::UnknownCustomer(_))
    ));
    assert!(shop_b.coffee_orders(coffee_b).unwrap().is_empty());
}

#[test]
fn given_snapshot_when_cleared_then_shop_unaffected() {
    // Arrange
    let mut shop = Shop::new();
    let customer = shop.add_customer("John").unwrap();
    let coffee = shop.add_coffee("Espresso").unwrap();
    shop.place_order(customer, coffee, 3.5).unwrap();

    // Act - mutate the returned snapshot
    let mut snapshot = shop.customer_orders(customer).unwrap();
    snapshot.clear();

    // Assert - repeated reads are unaffected and equal
    assert_eq!(shop.customer_orders(customer).unwrap().len(), 1);
    assert_eq!(
        shop.customer_coffees(customer).unwrap(),
        shop.customer_coffees(customer).unwrap()
    );
}

#[test]
fn given_valid_rename_when_applied_then_name_updates() {
    // Arrange
    let mut shop = Shop::new();
    let customer = shop.add_customer("John").unwrap();

    // Act
    shop.rename_customer(customer, "Jane").unwrap();

    // Assert
    assert_eq!(shop.customer(customer).unwrap().name(), "Jane");
}

#[test]
fn given_invalid_rename_when_applied_then_name_kept() {
    // Arrange
    let mut shop = Shop::new();
    let customer = shop.add_customer("John").unwrap();

    // Act
    let result = shop.rename_customer(customer, "");

    // Assert
    assert!(matches!(result, Err(DomainError::CustomerNameLength { .. })));
    assert_eq!(shop.customer(customer).unwrap().name(), "John");
}
