//! Conversions: order wire types → Order domain types.

use super::wire::{OrderItemResponse, OrderResponse};
use super::{Order, OrderItem};
use crate::error::SdkError;
use crate::shared::{parse_money, AddressId, OrderId, OrderNumber};

impl TryFrom<OrderItemResponse> for OrderItem {
    type Error = SdkError;

    fn try_from(item: OrderItemResponse) -> Result<Self, Self::Error> {
        Ok(OrderItem {
            unit_price: parse_money("item price", &item.price)?,
            total: parse_money("item total", &item.total)?,
            variant_name: item.variant_name.filter(|v| !v.is_empty()),
            product_name: item.product_name,
            quantity: item.quantity,
        })
    }
}

impl TryFrom<OrderResponse> for Order {
    type Error = SdkError;

    fn try_from(resp: OrderResponse) -> Result<Self, Self::Error> {
        let items = resp
            .items
            .into_iter()
            .map(OrderItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Order {
            subtotal: parse_money("subtotal", &resp.subtotal)?,
            tax: parse_money("tax", &resp.tax)?,
            shipping_cost: parse_money("shippingCost", &resp.shipping_cost)?,
            discount: parse_money("discount", &resp.discount)?,
            total: parse_money("total", &resp.total)?,
            id: OrderId::from(resp.id),
            order_number: OrderNumber::from(resp.order_number),
            status: resp.status,
            created_at: resp.created_at,
            paid_at: resp.paid_at,
            shipping_address_id: resp
                .shipping_address_id
                .filter(|id| !id.is_empty())
                .map(AddressId::from),
            items,
        })
    }
}
