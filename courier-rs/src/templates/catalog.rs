//! Built-in template catalog
//!
//! Every message the storefront sends starts from one of these definitions.
//! Each template carries both languages and both formats; the plain-text
//! body is authored by hand, not stripped from the HTML.

use crate::templates::types::{EmailTemplate, Localized};

/// The full built-in template set, in the order template pickers display it
pub fn builtin_templates() -> Vec<EmailTemplate> {
    vec![
        inquiry_acknowledgment(),
        quote_ready(),
        follow_up(),
        order_status_update(),
        inspection_report(),
        wholesale_welcome(),
    ]
}

fn inquiry_acknowledgment() -> EmailTemplate {
    EmailTemplate {
        id: "inquiry_acknowledgment".to_string(),
        name: Localized::new("Inquiry Acknowledgment", "Xác nhận yêu cầu"),
        subject: Localized::new(
            "We received your inquiry #{{inquiry_id}}",
            "Chúng tôi đã nhận được yêu cầu #{{inquiry_id}} của quý khách",
        ),
        body_html: Localized::new(
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Dear {{customer_name}},</p>
    <p>Thank you for your inquiry. We have received your request and our sales
    team is reviewing it now.</p>
    <p><strong>Inquiry reference:</strong> #{{inquiry_id}}<br>
    <strong>Items requested:</strong> {{item_count}}<br>
    <strong>Submitted on:</strong> {{submitted_date}}</p>
    {{#if company}}<p>We have registered this inquiry under <strong>{{company}}</strong>.</p>{{/if}}
    {{#if message}}<p>Your note to us:</p>
    <blockquote style="border-left: 3px solid #ccc; margin: 0; padding-left: 12px; color: #555;">{{message}}</blockquote>{{/if}}
    <p>You can expect a detailed quote within two business days. Replies to
    this email reach the sales agent handling your request directly.</p>
    <p>Best regards,<br>The Sales Team</p>
</div>"#,
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Kính gửi {{customer_name}},</p>
    <p>Cảm ơn quý khách đã gửi yêu cầu. Chúng tôi đã nhận được và đội ngũ
    kinh doanh đang xem xét.</p>
    <p><strong>Mã yêu cầu:</strong> #{{inquiry_id}}<br>
    <strong>Số sản phẩm:</strong> {{item_count}}<br>
    <strong>Ngày gửi:</strong> {{submitted_date}}</p>
    {{#if company}}<p>Yêu cầu này được ghi nhận dưới tên công ty <strong>{{company}}</strong>.</p>{{/if}}
    {{#if message}}<p>Lời nhắn của quý khách:</p>
    <blockquote style="border-left: 3px solid #ccc; margin: 0; padding-left: 12px; color: #555;">{{message}}</blockquote>{{/if}}
    <p>Quý khách sẽ nhận được báo giá chi tiết trong vòng hai ngày làm việc.
    Quý khách có thể trả lời trực tiếp email này để liên hệ với nhân viên
    phụ trách.</p>
    <p>Trân trọng,<br>Đội ngũ kinh doanh</p>
</div>"#,
        ),
        body_text: Localized::new(
            "Dear {{customer_name}},\n\n\
             Thank you for your inquiry. We have received your request and our sales team is reviewing it now.\n\n\
             Inquiry reference: #{{inquiry_id}}\n\
             Items requested: {{item_count}}\n\
             Submitted on: {{submitted_date}}\n\
             {{#if company}}Company: {{company}}\n{{/if}}\
             {{#if message}}\nYour note to us:\n{{message}}\n{{/if}}\n\
             You can expect a detailed quote within two business days. Replies to this email reach the sales agent handling your request directly.\n\n\
             Best regards,\nThe Sales Team",
            "Kính gửi {{customer_name}},\n\n\
             Cảm ơn quý khách đã gửi yêu cầu. Chúng tôi đã nhận được và đội ngũ kinh doanh đang xem xét.\n\n\
             Mã yêu cầu: #{{inquiry_id}}\n\
             Số sản phẩm: {{item_count}}\n\
             Ngày gửi: {{submitted_date}}\n\
             {{#if company}}Công ty: {{company}}\n{{/if}}\
             {{#if message}}\nLời nhắn của quý khách:\n{{message}}\n{{/if}}\n\
             Quý khách sẽ nhận được báo giá chi tiết trong vòng hai ngày làm việc. Quý khách có thể trả lời trực tiếp email này để liên hệ với nhân viên phụ trách.\n\n\
             Trân trọng,\nĐội ngũ kinh doanh",
        ),
    }
}

fn quote_ready() -> EmailTemplate {
    EmailTemplate {
        id: "quote_ready".to_string(),
        name: Localized::new("Quote Ready", "Báo giá sẵn sàng"),
        subject: Localized::new(
            "Your quote for inquiry #{{inquiry_id}} is ready",
            "Báo giá cho yêu cầu #{{inquiry_id}} của quý khách đã sẵn sàng",
        ),
        body_html: Localized::new(
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Dear {{customer_name}},</p>
    <p>Your quote is ready. Please find the details below.</p>
    {{quote_items_list}}
    <p style="font-size: 18px;"><strong>Total: {{total_price}}</strong></p>
    {{#if valid_until}}<p>This quote is valid until <strong>{{valid_until}}</strong>.</p>{{/if}}
    <p>To proceed with the order, or if you would like to adjust quantities or
    finishes, simply reply to this email.</p>
    <p>Best regards,<br>The Sales Team</p>
</div>"#,
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Kính gửi {{customer_name}},</p>
    <p>Báo giá của quý khách đã sẵn sàng. Chi tiết như sau.</p>
    {{quote_items_list}}
    <p style="font-size: 18px;"><strong>Tổng cộng: {{total_price}}</strong></p>
    {{#if valid_until}}<p>Báo giá có hiệu lực đến <strong>{{valid_until}}</strong>.</p>{{/if}}
    <p>Để tiến hành đặt hàng, hoặc nếu quý khách muốn điều chỉnh số lượng hay
    chất liệu hoàn thiện, vui lòng trả lời email này.</p>
    <p>Trân trọng,<br>Đội ngũ kinh doanh</p>
</div>"#,
        ),
        body_text: Localized::new(
            "Dear {{customer_name}},\n\n\
             Your quote is ready.\n\n\
             {{quote_items}}\n\n\
             Total: {{total_price}}\n\
             {{#if valid_until}}This quote is valid until {{valid_until}}.\n{{/if}}\n\
             To proceed with the order, or to adjust quantities or finishes, simply reply to this email.\n\n\
             Best regards,\nThe Sales Team",
            "Kính gửi {{customer_name}},\n\n\
             Báo giá của quý khách đã sẵn sàng.\n\n\
             {{quote_items}}\n\n\
             Tổng cộng: {{total_price}}\n\
             {{#if valid_until}}Báo giá có hiệu lực đến {{valid_until}}.\n{{/if}}\n\
             Để tiến hành đặt hàng hoặc điều chỉnh số lượng, chất liệu hoàn thiện, vui lòng trả lời email này.\n\n\
             Trân trọng,\nĐội ngũ kinh doanh",
        ),
    }
}

fn follow_up() -> EmailTemplate {
    EmailTemplate {
        id: "follow_up".to_string(),
        name: Localized::new("Follow-up", "Thư nhắc"),
        subject: Localized::new(
            "Following up on your inquiry #{{inquiry_id}}",
            "Về yêu cầu #{{inquiry_id}} của quý khách",
        ),
        body_html: Localized::new(
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Dear {{customer_name}},</p>
    <p>We wanted to follow up on the quote we sent for inquiry
    <strong>#{{inquiry_id}}</strong> on {{submitted_date}}.</p>
    <p>If you have any questions about pricing, materials, lead times or
    shipping, we are happy to help. If your plans have changed, a short reply
    lets us close the file on our side.</p>
    {{#if agent_name}}<p>Your inquiry is handled personally by {{agent_name}}.</p>{{/if}}
    <p>Best regards,<br>The Sales Team</p>
</div>"#,
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Kính gửi {{customer_name}},</p>
    <p>Chúng tôi muốn hỏi thăm về báo giá đã gửi cho yêu cầu
    <strong>#{{inquiry_id}}</strong> ngày {{submitted_date}}.</p>
    <p>Nếu quý khách có câu hỏi về giá cả, chất liệu, thời gian sản xuất hay
    vận chuyển, chúng tôi luôn sẵn lòng hỗ trợ. Nếu kế hoạch của quý khách đã
    thay đổi, xin vui lòng hồi âm ngắn gọn để chúng tôi đóng hồ sơ.</p>
    {{#if agent_name}}<p>Yêu cầu của quý khách do {{agent_name}} trực tiếp phụ trách.</p>{{/if}}
    <p>Trân trọng,<br>Đội ngũ kinh doanh</p>
</div>"#,
        ),
        body_text: Localized::new(
            "Dear {{customer_name}},\n\n\
             We wanted to follow up on the quote we sent for inquiry #{{inquiry_id}} on {{submitted_date}}.\n\n\
             If you have any questions about pricing, materials, lead times or shipping, we are happy to help. If your plans have changed, a short reply lets us close the file on our side.\n\
             {{#if agent_name}}\nYour inquiry is handled personally by {{agent_name}}.\n{{/if}}\n\
             Best regards,\nThe Sales Team",
            "Kính gửi {{customer_name}},\n\n\
             Chúng tôi muốn hỏi thăm về báo giá đã gửi cho yêu cầu #{{inquiry_id}} ngày {{submitted_date}}.\n\n\
             Nếu quý khách có câu hỏi về giá cả, chất liệu, thời gian sản xuất hay vận chuyển, chúng tôi luôn sẵn lòng hỗ trợ. Nếu kế hoạch của quý khách đã thay đổi, xin vui lòng hồi âm ngắn gọn để chúng tôi đóng hồ sơ.\n\
             {{#if agent_name}}\nYêu cầu của quý khách do {{agent_name}} trực tiếp phụ trách.\n{{/if}}\n\
             Trân trọng,\nĐội ngũ kinh doanh",
        ),
    }
}

fn order_status_update() -> EmailTemplate {
    EmailTemplate {
        id: "order_status_update".to_string(),
        name: Localized::new("Order Status Update", "Cập nhật đơn hàng"),
        subject: Localized::new(
            "Order {{order_id}}: {{status}}",
            "Đơn hàng {{order_id}}: {{status}}",
        ),
        body_html: Localized::new(
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Dear {{customer_name}},</p>
    <p>Your order <strong>{{order_id}}</strong> has moved to a new stage:</p>
    <p style="font-size: 16px; background: #f3f4f6; padding: 10px 14px;"><strong>{{status}}</strong></p>
    {{#if status_note}}<p>{{status_note}}</p>{{/if}}
    {{#if delivery_estimate}}<p>Estimated delivery: <strong>{{delivery_estimate}}</strong>.</p>{{/if}}
    <p>We will keep you informed at every stage. Reply to this email with any
    questions about your order.</p>
    <p>Best regards,<br>The Sales Team</p>
</div>"#,
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Kính gửi {{customer_name}},</p>
    <p>Đơn hàng <strong>{{order_id}}</strong> của quý khách vừa chuyển sang giai đoạn mới:</p>
    <p style="font-size: 16px; background: #f3f4f6; padding: 10px 14px;"><strong>{{status}}</strong></p>
    {{#if status_note}}<p>{{status_note}}</p>{{/if}}
    {{#if delivery_estimate}}<p>Dự kiến giao hàng: <strong>{{delivery_estimate}}</strong>.</p>{{/if}}
    <p>Chúng tôi sẽ thông báo cho quý khách ở từng giai đoạn. Mọi thắc mắc về
    đơn hàng, quý khách vui lòng trả lời email này.</p>
    <p>Trân trọng,<br>Đội ngũ kinh doanh</p>
</div>"#,
        ),
        body_text: Localized::new(
            "Dear {{customer_name}},\n\n\
             Your order {{order_id}} has moved to a new stage: {{status}}\n\
             {{#if status_note}}\n{{status_note}}\n{{/if}}\
             {{#if delivery_estimate}}\nEstimated delivery: {{delivery_estimate}}.\n{{/if}}\n\
             We will keep you informed at every stage. Reply to this email with any questions about your order.\n\n\
             Best regards,\nThe Sales Team",
            "Kính gửi {{customer_name}},\n\n\
             Đơn hàng {{order_id}} của quý khách vừa chuyển sang giai đoạn mới: {{status}}\n\
             {{#if status_note}}\n{{status_note}}\n{{/if}}\
             {{#if delivery_estimate}}\nDự kiến giao hàng: {{delivery_estimate}}.\n{{/if}}\n\
             Chúng tôi sẽ thông báo cho quý khách ở từng giai đoạn. Mọi thắc mắc về đơn hàng, quý khách vui lòng trả lời email này.\n\n\
             Trân trọng,\nĐội ngũ kinh doanh",
        ),
    }
}

fn inspection_report() -> EmailTemplate {
    EmailTemplate {
        id: "inspection_report".to_string(),
        name: Localized::new("Inspection Report", "Báo cáo kiểm hàng"),
        subject: Localized::new(
            "Inspection result for order {{order_id}}",
            "Kết quả kiểm hàng cho đơn {{order_id}}",
        ),
        body_html: Localized::new(
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Dear {{customer_name}},</p>
    <p>The pre-shipment inspection for order <strong>{{order_id}}</strong> was
    completed on {{inspection_date}}.</p>
    <p><strong>Result:</strong> {{result}}</p>
    {{#if notes}}<p><strong>Inspector's notes:</strong></p>
    <blockquote style="border-left: 3px solid #ccc; margin: 0; padding-left: 12px; color: #555;">{{notes}}</blockquote>{{/if}}
    {{#if report_link}}<p>The full report with photographs is available here:
    <a href="{{report_link}}">{{report_link}}</a></p>{{/if}}
    <p>Please review and reply with your approval so we can release the goods
    for shipment.</p>
    <p>Best regards,<br>The Sales Team</p>
</div>"#,
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Kính gửi {{customer_name}},</p>
    <p>Đợt kiểm hàng trước xuất xưởng cho đơn <strong>{{order_id}}</strong> đã
    hoàn tất ngày {{inspection_date}}.</p>
    <p><strong>Kết quả:</strong> {{result}}</p>
    {{#if notes}}<p><strong>Ghi chú của nhân viên kiểm hàng:</strong></p>
    <blockquote style="border-left: 3px solid #ccc; margin: 0; padding-left: 12px; color: #555;">{{notes}}</blockquote>{{/if}}
    {{#if report_link}}<p>Báo cáo đầy đủ kèm hình ảnh xem tại:
    <a href="{{report_link}}">{{report_link}}</a></p>{{/if}}
    <p>Quý khách vui lòng xem xét và trả lời xác nhận để chúng tôi xuất hàng.</p>
    <p>Trân trọng,<br>Đội ngũ kinh doanh</p>
</div>"#,
        ),
        body_text: Localized::new(
            "Dear {{customer_name}},\n\n\
             The pre-shipment inspection for order {{order_id}} was completed on {{inspection_date}}.\n\n\
             Result: {{result}}\n\
             {{#if notes}}\nInspector's notes:\n{{notes}}\n{{/if}}\
             {{#if report_link}}\nFull report: {{report_link}}\n{{/if}}\n\
             Please review and reply with your approval so we can release the goods for shipment.\n\n\
             Best regards,\nThe Sales Team",
            "Kính gửi {{customer_name}},\n\n\
             Đợt kiểm hàng trước xuất xưởng cho đơn {{order_id}} đã hoàn tất ngày {{inspection_date}}.\n\n\
             Kết quả: {{result}}\n\
             {{#if notes}}\nGhi chú của nhân viên kiểm hàng:\n{{notes}}\n{{/if}}\
             {{#if report_link}}\nBáo cáo đầy đủ: {{report_link}}\n{{/if}}\n\
             Quý khách vui lòng xem xét và trả lời xác nhận để chúng tôi xuất hàng.\n\n\
             Trân trọng,\nĐội ngũ kinh doanh",
        ),
    }
}

fn wholesale_welcome() -> EmailTemplate {
    EmailTemplate {
        id: "wholesale_welcome".to_string(),
        name: Localized::new("Wholesale Welcome", "Chào mừng đối tác sỉ"),
        subject: Localized::new(
            "Your wholesale account is approved",
            "Tài khoản đối tác sỉ của quý khách đã được duyệt",
        ),
        body_html: Localized::new(
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Dear {{customer_name}},</p>
    <p>Welcome aboard. The wholesale account for <strong>{{company}}</strong>
    has been approved, and wholesale pricing is now active whenever you are
    signed in.</p>
    <p>Browse the trade catalog here: <a href="{{catalog_link}}">{{catalog_link}}</a></p>
    {{#if account_manager}}<p>Your dedicated account manager is
    <strong>{{account_manager}}</strong>; replies to this email go straight to
    them.</p>{{/if}}
    <p>Best regards,<br>The Sales Team</p>
</div>"#,
            r#"<div style="font-family: Arial, sans-serif; color: #333; line-height: 1.6;">
    <p>Kính gửi {{customer_name}},</p>
    <p>Chào mừng quý khách. Tài khoản đối tác sỉ của <strong>{{company}}</strong>
    đã được duyệt, giá sỉ sẽ được áp dụng khi quý khách đăng nhập.</p>
    <p>Xem danh mục dành cho đối tác tại: <a href="{{catalog_link}}">{{catalog_link}}</a></p>
    {{#if account_manager}}<p>Nhân viên phụ trách riêng của quý khách là
    <strong>{{account_manager}}</strong>; thư trả lời sẽ được chuyển trực tiếp
    đến họ.</p>{{/if}}
    <p>Trân trọng,<br>Đội ngũ kinh doanh</p>
</div>"#,
        ),
        body_text: Localized::new(
            "Dear {{customer_name}},\n\n\
             Welcome aboard. The wholesale account for {{company}} has been approved, and wholesale pricing is now active whenever you are signed in.\n\n\
             Trade catalog: {{catalog_link}}\n\
             {{#if account_manager}}\nYour dedicated account manager is {{account_manager}}; replies to this email go straight to them.\n{{/if}}\n\
             Best regards,\nThe Sales Team",
            "Kính gửi {{customer_name}},\n\n\
             Chào mừng quý khách. Tài khoản đối tác sỉ của {{company}} đã được duyệt, giá sỉ sẽ được áp dụng khi quý khách đăng nhập.\n\n\
             Danh mục dành cho đối tác: {{catalog_link}}\n\
             {{#if account_manager}}\nNhân viên phụ trách riêng của quý khách là {{account_manager}}; thư trả lời sẽ được chuyển trực tiếp đến họ.\n{{/if}}\n\
             Trân trọng,\nĐội ngũ kinh doanh",
        ),
    }
}
